//! Elevated Steam Installer Launcher
//!
//! Runs `sudo python3 install_steam.py` and exits with the installer's status.
//! `sudo` may prompt for a password on the inherited terminal.

use clap::Parser;
use std::process::exit;
use steam_launcher::config::DEFAULT_ELEVATION;
use steam_launcher::{LaunchArgs, Variant};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "steam-launcher-sudo",
    version,
    about = "Launch the Steam installer script with elevated privileges"
)]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Program used to elevate the interpreter; empty disables elevation
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_ELEVATION)]
    elevate_with: String,
}

fn main() {
    let cli = Cli::parse();
    steam_launcher::init_logging();

    let config = cli
        .launch
        .into_config(Variant::Elevated)
        .with_elevation(Some(cli.elevate_with));
    if config.elevation.is_some() && steam_launcher::runner::is_privileged() {
        debug!("Already running as root; elevation will be a no-op");
    }

    match steam_launcher::launch(config) {
        Ok(outcome) => exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(1);
        }
    }
}
