//! Shared CLI plumbing: error type and exit codes.

use std::fmt;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success,
    /// Generic failure (I/O, bad arguments)
    Error,
    /// The keymap could not be parsed (structural failure)
    ParseFailure,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Error => 1,
            Self::ParseFailure => 2,
        }
    }
}

/// A CLI-level error: a user-facing message plus the exit code to use.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable message shown on stderr
    pub message: String,
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
}

impl CliError {
    /// An I/O or environment failure.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Error,
        }
    }

    /// A keymap parse failure.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ParseFailure,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;
