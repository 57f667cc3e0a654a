//! The argument vector passed to the operating system.
//!
//! The installer is executed directly rather than through `sh -c`, so script
//! paths containing spaces or shell metacharacters are passed through as-is.

use crate::config::LaunchConfig;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `[elevation] interpreter script`
    pub fn for_config(config: &LaunchConfig) -> Self {
        let interpreter = config.interpreter.as_os_str();
        let script = config.script.as_os_str();

        match &config.elevation {
            Some(elevation) => Self::new(elevation).arg(interpreter).arg(script),
            None => Self::new(interpreter).arg(script),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Builds a `Command` inheriting the launcher's stdio, so elevation
    /// prompts and installer output reach the terminal.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
