// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Browser-extension match patterns compiled to regular expressions.
//!
//! ```
//! let matcher = matchpat::compile("*://*.mozilla.org/*").unwrap();
//! assert!(matcher.is_match("https://developer.mozilla.org/en-US/"));
//! assert!(!matcher.is_match("ftp://mozilla.org/"));
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod harness;
pub mod pattern;
pub mod report;

pub use pattern::{CompiledMatcher, MatchPattern, MatcherSet, PatternError, compile};
