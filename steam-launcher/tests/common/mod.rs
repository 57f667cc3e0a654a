//! Common test utilities and macros

use std::path::Path;
use std::process::Command;

/// What a launcher run is expected to produce.
#[derive(Debug)]
pub enum TestResult {
    /// Exit status 0 and `stdout` ends with this message.
    Success(String),
    /// Exit status `code` and `stderr` matches the regex.
    FailureRegex { code: i32, stderr: String },
}

/// What a launcher run actually produced.
#[derive(Debug)]
pub struct LaunchOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl PartialEq<TestResult> for LaunchOutput {
    fn eq(&self, expected: &TestResult) -> bool {
        match expected {
            TestResult::Success(message) => {
                self.code == Some(0)
                    && self
                        .stdout
                        .starts_with("Launching Steam Installer via Python...\n")
                    && self.stdout.trim_end().ends_with(message.as_str())
            }
            TestResult::FailureRegex { code, stderr } => {
                self.code == Some(*code)
                    && regex::Regex::new(stderr).unwrap().is_match(&self.stderr)
            }
        }
    }
}

/// Run a launcher binary with `sh` standing in for the Python interpreter.
pub fn run_launcher(binary: &str, script: &Path, extra_args: &[&str]) -> LaunchOutput {
    let output = Command::new(binary)
        .arg("--interpreter")
        .arg("sh")
        .arg("--script")
        .arg(script)
        .args(extra_args)
        .env_remove("STEAM_LAUNCHER_LOG")
        .output()
        .unwrap();

    LaunchOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}

pub fn input_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("inputs")
        .join(name)
}

#[macro_export]
macro_rules! check_launcher {
    ($test_name:ident, input=$input_file:expr, result=$expected:expr) => {
        check_launcher!($test_name, input = $input_file, args = [], result = $expected);
    };
    ($test_name:ident, input=$input_file:expr, args=[$($arg:expr),*], result=$expected:expr) => {
        #[test]
        fn $test_name() {
            let input_path = crate::common::input_path($input_file);
            let output = crate::common::run_launcher(
                env!("CARGO_BIN_EXE_steam-launcher"),
                &input_path,
                &[$($arg),*],
            );
            assert_eq!(output, $expected);
        }
    };
}
