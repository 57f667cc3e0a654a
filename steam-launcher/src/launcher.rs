//! Single-shot launcher: announce, run the installer once, report, return status.

use crate::command::CommandLine;
use crate::config::{LAUNCH_MESSAGE, LaunchConfig};
use crate::outcome::Outcome;
use crate::runner::ProcessRunner;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, info, warn};

pub struct Launcher<R, O, E> {
    config: LaunchConfig,
    runner: R,
    out: O,
    err: E,
}

impl<R: ProcessRunner, O: Write, E: Write> Launcher<R, O, E> {
    /// Create a launcher writing its messages to `out` and `err`.
    pub fn new(config: LaunchConfig, runner: R, out: O, err: E) -> Self {
        Self {
            config,
            runner,
            out,
            err,
        }
    }

    /// Run the installer exactly once and report how it went.
    ///
    /// A non-zero child status is not an error here; it is returned as
    /// [`Outcome::ExitError`] after the failure message is printed.
    ///
    /// # Returns
    /// * `Ok(Outcome)` - The child was run (or failed to spawn) and reported
    /// * `Err(anyhow::Error)` - The launch notice could not be written; nothing was spawned
    pub fn run(&mut self) -> Result<Outcome> {
        writeln!(self.out, "{}", LAUNCH_MESSAGE).context("Failed to write launch notice")?;
        // The child shares our stdout, so everything before it must be out first.
        self.out.flush().context("Failed to flush stdout")?;

        if !self.config.script.exists() {
            warn!(
                "Installer script {} not found; the interpreter will report the failure",
                self.config.script.display()
            );
        }

        let command = CommandLine::for_config(&self.config);
        info!("Running `{}`", command);

        let outcome = Outcome::from(self.runner.run(&command));
        debug!("Installer outcome: {:?}", outcome);

        if let Err(e) = self.report(&command, &outcome) {
            warn!("Failed to report installer outcome: {}", e);
        }

        Ok(outcome)
    }

    fn report(&mut self, command: &CommandLine, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Success => {
                writeln!(self.out, "{}", self.config.variant.success_message())?;
                self.out.flush()
            }
            Outcome::ExitError { code, signal: None } => {
                writeln!(
                    self.err,
                    "An error occurred while running the Python script (exit status {}).",
                    code
                )
            }
            Outcome::ExitError {
                code,
                signal: Some(signal),
            } => {
                writeln!(
                    self.err,
                    "An error occurred while running the Python script (killed by signal {}, exit status {}).",
                    signal, code
                )
            }
            Outcome::SpawnError(e) => {
                writeln!(
                    self.err,
                    "An error occurred while running the Python script: could not start `{}`: {} (exit status {}).",
                    command,
                    e,
                    e.exit_code()
                )
            }
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, O, E) {
        (self.runner, self.out, self.err)
    }
}
