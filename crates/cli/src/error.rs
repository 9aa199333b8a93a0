// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// A URL was not covered, or a self-test fixture failed.
    CheckFailed = 1,
    /// Bad config file or bad pattern on the command line.
    ConfigError = 2,
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Library errors outside pattern compilation itself.
///
/// Pattern failures stay [`crate::PatternError`]; commands map those to
/// [`ExitCode::ConfigError`] directly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Exit code a command should report for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Io { .. } => ExitCode::InternalError,
            Error::Config { .. } => ExitCode::ConfigError,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
