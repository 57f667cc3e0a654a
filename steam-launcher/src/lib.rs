//! Steam Installer Launcher Library
//!
//! Runs the external `install_steam.py` script, optionally behind an
//! elevation program such as `sudo`, and turns its termination status into
//! console messages and the launcher's own exit code.
//!
//! The installer itself is opaque: only its exit status is observed.

pub mod cli;
pub mod command;
pub mod config;
pub mod launcher;
pub mod outcome;
pub mod runner;

pub use crate::cli::LaunchArgs;
pub use crate::command::CommandLine;
pub use crate::config::{LaunchConfig, Variant};
pub use crate::launcher::Launcher;
pub use crate::outcome::{ChildExit, Outcome, SpawnError};
pub use crate::runner::{ProcessRunner, SystemRunner};

use anyhow::Result;
use std::io::IsTerminal;

/// Environment variable holding the log filter, e.g. `debug`.
pub const LOG_ENV: &str = "STEAM_LAUNCHER_LOG";

/// Install the stderr log subscriber used by the launcher binaries.
pub fn init_logging() {
    let log_level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// Run the installer described by `config` against the real process table
/// and console.
pub fn launch(config: LaunchConfig) -> Result<Outcome> {
    Launcher::new(config, SystemRunner, std::io::stdout(), std::io::stderr()).run()
}

/// Run `python3 install_steam.py` from the working directory, behind `sudo`
/// when `elevated` is set.
///
/// # Examples
/// ```ignore
/// let outcome = steam_launcher::run_installer(false)?;
/// std::process::exit(outcome.exit_code());
/// ```
pub fn run_installer(elevated: bool) -> Result<Outcome> {
    launch(LaunchConfig::new(Variant::from_elevated(elevated)))
}
