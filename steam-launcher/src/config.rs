//! Launch configuration: which interpreter runs which script, and how it is elevated.

use std::path::PathBuf;

pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_SCRIPT: &str = "install_steam.py";
pub const DEFAULT_ELEVATION: &str = "sudo";

/// Printed before the installer is spawned.
pub const LAUNCH_MESSAGE: &str = "Launching Steam Installer via Python...";

/// Which of the two launcher programs is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Runs the script as the invoking user.
    Standard,
    /// Prefixes the interpreter with an elevation program.
    Elevated,
}

impl Variant {
    pub const fn from_elevated(elevated: bool) -> Self {
        if elevated {
            Variant::Elevated
        } else {
            Variant::Standard
        }
    }

    pub const fn is_elevated(self) -> bool {
        matches!(self, Variant::Elevated)
    }

    /// Hint logged at startup when the standard launcher runs without root.
    pub const fn privilege_hint(self, privileged: bool) -> Option<&'static str> {
        match self {
            Variant::Standard if !privileged => Some(
                "Not running as root; use steam-launcher-sudo to run the installer elevated",
            ),
            _ => None,
        }
    }

    pub const fn success_message(self) -> &'static str {
        match self {
            Variant::Standard => "Python script finished successfully.",
            Variant::Elevated => "Process finished successfully.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub interpreter: PathBuf,
    pub script: PathBuf,
    /// Program placed in front of the interpreter, e.g. `sudo`.
    pub elevation: Option<String>,
    pub variant: Variant,
}

impl LaunchConfig {
    /// Defaults for `variant`: `python3 install_steam.py`, prefixed with `sudo`
    /// when elevated.
    pub fn new(variant: Variant) -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script: PathBuf::from(DEFAULT_SCRIPT),
            elevation: variant
                .is_elevated()
                .then(|| DEFAULT_ELEVATION.to_string()),
            variant,
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }

    /// Replace the elevation program. An empty name disables elevation.
    pub fn with_elevation(mut self, program: Option<String>) -> Self {
        self.elevation = program.filter(|p| !p.trim().is_empty());
        self
    }
}
