// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match pattern compilation.
//!
//! Turns a browser-extension match pattern into an anchored regex:
//! - `<all_urls>` and the empty pattern: any supported scheme prefix
//! - `scheme://host/path`: scheme alternation, host matcher and path matcher
//!   joined between `^` and `$`

mod error;
pub mod matcher;
pub mod parse;
pub mod scheme;

pub use error::PatternError;
pub use matcher::{CompiledMatcher, MatcherSet, compile};
pub use parse::{ALL_URLS, HostPattern, MatchPattern, PathPattern};
pub use scheme::Scheme;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
