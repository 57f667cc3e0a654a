//! Steam Installer Launcher
//!
//! Runs `install_steam.py` with `python3` as the invoking user and exits
//! with the installer's status.

use clap::Parser;
use std::process::exit;
use steam_launcher::{LaunchArgs, Variant};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "steam-launcher", version, about = "Launch the Steam installer script")]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,
}

fn main() {
    let cli = Cli::parse();
    steam_launcher::init_logging();

    if let Some(hint) = Variant::Standard.privilege_hint(steam_launcher::runner::is_privileged()) {
        info!("{}", hint);
    }

    match steam_launcher::launch(cli.launch.into_config(Variant::Standard)) {
        Ok(outcome) => exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(1);
        }
    }
}
