//! Command-line argument handling.
//!
//! The surface is deliberately tiny: an optional trailing `f:<path>`
//! argument names the script file, everything else is passed through to
//! the script as `arg0`..`argN`.  That shape does not fit declarative
//! parsers, so the scan is done by hand.

use std::path::PathBuf;

pub const DEFAULT_SCRIPT: &str = "GBuildFile";

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Script file to interpret.
    pub script: PathBuf,
    /// The full argv, exposed to the script verbatim.
    pub raw_args: Vec<String>,
}

/// Parses the process arguments.
pub fn parse_args() -> CliArgs {
    parse_argv(std::env::args().collect())
}

/// Split out for testing.
pub fn parse_argv(argv: Vec<String>) -> CliArgs {
    let mut script = PathBuf::from(DEFAULT_SCRIPT);
    if argv.len() > 1 {
        if let Some(path) = argv[argv.len() - 1].strip_prefix("f:") {
            if !path.is_empty() {
                script = PathBuf::from(path);
            }
        }
    }
    CliArgs {
        script,
        raw_args: argv,
    }
}
