// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while parsing or compiling a match pattern.

/// A match pattern was rejected.
///
/// Validity is a pure function of the input string, so none of these are
/// worth retrying without changing the pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The string does not follow the `scheme://host/path` grammar.
    #[error("\"{0}\" is not a valid match pattern")]
    InvalidPattern(String),

    /// The grammar matched but a host is missing for a scheme that needs one.
    #[error("\"{0}\" does not have a valid host")]
    InvalidHost(String),

    /// The regex engine refused the assembled expression.
    #[error("failed to compile match pattern \"{pattern}\"")]
    Build {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// The pattern text that caused the error.
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::InvalidPattern(p) | PatternError::InvalidHost(p) => p,
            PatternError::Build { pattern, .. } => pattern,
        }
    }
}
