//! Command-line options shared by both launcher binaries.

use crate::config::{DEFAULT_INTERPRETER, DEFAULT_SCRIPT, LaunchConfig, Variant};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct LaunchArgs {
    /// Interpreter used to run the installer script
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: PathBuf,

    /// Path to the installer script
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,
}

impl LaunchArgs {
    pub fn into_config(self, variant: Variant) -> LaunchConfig {
        LaunchConfig::new(variant)
            .with_interpreter(self.interpreter)
            .with_script(self.script)
    }
}
