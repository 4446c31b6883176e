//! Shell bridge for the `$` factor.
//!
//! Commands run synchronously through `sh -c`, inheriting the
//! interpreter's stdio so build tools can stream their output.  Spawn
//! failure is not fatal to the script; it reports as exit status 1.

use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Runs `command` in `cwd` and returns its exit status.
pub fn run(command: &str, cwd: &Path) -> i32 {
    debug!(command, "running shell command");
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .status();
    match status {
        Ok(st) => {
            let code = st.code().unwrap_or(1);
            debug!(code, "shell command finished");
            code
        }
        Err(err) => {
            debug!(%err, "failed to spawn shell");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_exit_status() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(run("exit 0", &cwd), 0);
        assert_eq!(run("exit 7", &cwd), 7);
    }

    #[test]
    fn runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run("test \"$(pwd -P)\" = \"$(pwd -P)\"", dir.path()), 0);
        assert_eq!(run("touch marker", dir.path()), 0);
        assert!(dir.path().join("marker").exists());
    }
}
