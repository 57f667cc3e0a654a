//! Termination status of the installer child and the exit code derived from it.

use std::fmt;
use std::io::ErrorKind;
use std::process::ExitStatus;

/// Exit status a POSIX shell reports when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit status a POSIX shell reports when a command is found but not executable.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Offset added to a signal number when reporting a signal-terminated child.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// How the child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Code(i32),
    Signal(i32),
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildExit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ChildExit::Signal(signal);
            }
        }

        ChildExit::Code(1)
    }
}

/// The child could not be started at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    NotFound,
    PermissionDenied,
    Other(String),
}

impl SpawnError {
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => SpawnError::NotFound,
            ErrorKind::PermissionDenied => SpawnError::PermissionDenied,
            _ => SpawnError::Other(err.to_string()),
        }
    }

    /// Status reported for this failure, matching what a shell would have returned.
    pub const fn exit_code(&self) -> i32 {
        match self {
            SpawnError::NotFound => EXIT_NOT_FOUND,
            SpawnError::PermissionDenied => EXIT_NOT_EXECUTABLE,
            SpawnError::Other(_) => 1,
        }
    }
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::NotFound => write!(f, "command not found"),
            SpawnError::PermissionDenied => write!(f, "permission denied"),
            SpawnError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Result of a single launch.
///
/// `ExitError` and `SpawnError` are kept apart for diagnostics, but both
/// surface to the caller the same way: a failure message and a non-zero
/// [`Outcome::exit_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ExitError { code: i32, signal: Option<i32> },
    SpawnError(SpawnError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// The launcher's own exit status.
    ///
    /// Equal to the child's exit code when it exited normally, `128 + N` when
    /// it was killed by signal `N`, and the shell's 127/126 when it could not
    /// be spawned.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::ExitError { code, .. } => *code,
            Outcome::SpawnError(err) => err.exit_code(),
        }
    }
}

impl From<ChildExit> for Outcome {
    fn from(exit: ChildExit) -> Self {
        match exit {
            ChildExit::Code(0) => Outcome::Success,
            ChildExit::Code(code) => Outcome::ExitError { code, signal: None },
            ChildExit::Signal(signal) => Outcome::ExitError {
                code: SIGNAL_EXIT_BASE + signal,
                signal: Some(signal),
            },
        }
    }
}

impl From<Result<ChildExit, SpawnError>> for Outcome {
    fn from(result: Result<ChildExit, SpawnError>) -> Self {
        match result {
            Ok(exit) => exit.into(),
            Err(err) => Outcome::SpawnError(err),
        }
    }
}
