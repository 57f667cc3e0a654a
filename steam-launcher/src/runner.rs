//! Process spawning and the privilege check around it.

use crate::command::CommandLine;
use crate::outcome::{ChildExit, SpawnError};
use tracing::debug;

/// Spawns a command and blocks until it terminates.
pub trait ProcessRunner {
    fn run(&mut self, command: &CommandLine) -> Result<ChildExit, SpawnError>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &CommandLine) -> Result<ChildExit, SpawnError> {
        let status = command.to_command().status().map_err(|e| {
            debug!("Failed to spawn `{}`: {}", command, e);
            SpawnError::from_io(&e)
        })?;
        debug!("`{}` terminated with {}", command, status);
        Ok(status.into())
    }
}

/// Whether the launcher already runs with root privileges.
#[cfg(unix)]
pub fn is_privileged() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_privileged() -> bool {
    false
}
