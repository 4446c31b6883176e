//! Fatal diagnostics.
//!
//! Every contract violation in a GBuild script is fatal: the interpreter
//! propagates a single [`Error`] up to `main`, which prints one line of the
//! form `<script>:<line>: error: <message>` and terminates with a non-zero
//! status.  There is no recoverable-error path and no multi-error batching.

use thiserror::Error;

/// What went wrong, without the source position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Unexpected token, unmatched brace, malformed directive.
    #[error("{0}")]
    Syntax(String),

    /// Unknown variable, duplicate declaration, reserved-name use,
    /// directive-reserved-variable conflict.
    #[error("{0}")]
    Name(String),

    /// Operator or built-in applied to an incompatible value tag.
    #[error("{0}")]
    Type(String),

    /// Negative or out-of-bounds index/bound, division by zero,
    /// empty-result string cut.
    #[error("{0}")]
    Range(String),

    /// Operand-stack overflow/underflow — a grammar invariant violation.
    #[error("{0}")]
    Resource(String),

    /// Not a failure: the `exit` directive unwinding to `main`.  Carries the
    /// already-normalised process status (absolute value modulo 256).
    #[error("exit with status {0}")]
    Exit(i32),
}

/// A fatal script error tagged with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{line}: error: {kind}")]
pub struct Error {
    pub line: u32,
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(line: u32, kind: ErrorKind) -> Self {
        Error { line, kind }
    }

    /// The process status requested by an `exit` directive, if any.
    pub fn exit_status(&self) -> Option<i32> {
        match self.kind {
            ErrorKind::Exit(code) => Some(code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line() {
        let e = Error::new(7, ErrorKind::Type("Can't divide strings".into()));
        assert_eq!(e.to_string(), "7: error: Can't divide strings");
    }

    #[test]
    fn exit_status_only_for_exit() {
        assert_eq!(Error::new(1, ErrorKind::Exit(5)).exit_status(), Some(5));
        assert_eq!(
            Error::new(1, ErrorKind::Range("x".into())).exit_status(),
            None
        );
    }
}
