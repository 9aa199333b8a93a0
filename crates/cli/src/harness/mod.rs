// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture-driven self test for the pattern compiler.
//!
//! Runs (pattern, accept, reject) fixtures in parallel using rayon and
//! reports, per pattern, which expected accepts were rejected and which
//! expected rejects were accepted.

mod fixtures;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pattern::compile;

pub use fixtures::{builtin_fixtures, builtin_invalid};

/// One pattern with the URLs it must and must not cover.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub pattern: String,

    #[serde(default)]
    pub accept: Vec<String>,

    #[serde(default)]
    pub reject: Vec<String>,
}

/// Outcome of running one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureReport {
    pub pattern: String,

    /// Regex source, when the pattern compiled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Compile error message, when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Expected accepts that the matcher rejected.
    pub missed: Vec<String>,

    /// Expected rejects that the matcher accepted.
    pub unexpected: Vec<String>,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.missed.is_empty() && self.unexpected.is_empty()
    }
}

/// Outcome of compiling a pattern that is expected to be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidReport {
    pub pattern: String,

    /// The rejection message; `None` means the pattern wrongly compiled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvalidReport {
    pub fn passed(&self) -> bool {
        self.error.is_some()
    }
}

/// All reports from one self-test run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub fixtures: Vec<FixtureReport>,
    pub invalid: Vec<InvalidReport>,
}

impl Summary {
    pub fn passed(&self) -> bool {
        self.fixtures.iter().all(FixtureReport::passed)
            && self.invalid.iter().all(InvalidReport::passed)
    }

    /// Number of failing fixture and invalid-pattern reports.
    pub fn failures(&self) -> usize {
        self.fixtures.iter().filter(|r| !r.passed()).count()
            + self.invalid.iter().filter(|r| !r.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.fixtures.len() + self.invalid.len()
    }
}

/// Compile a fixture's pattern and probe every listed URL.
pub fn run_fixture(fixture: &Fixture) -> FixtureReport {
    match compile(&fixture.pattern) {
        Ok(matcher) => FixtureReport {
            pattern: fixture.pattern.clone(),
            regex: Some(matcher.as_str().to_string()),
            error: None,
            missed: fixture.accept.iter().filter(|url| !matcher.is_match(url)).cloned().collect(),
            unexpected: fixture.reject.iter().filter(|url| matcher.is_match(url)).cloned().collect(),
        },
        Err(e) => {
            tracing::warn!("fixture pattern {:?} failed to compile: {}", fixture.pattern, e);
            FixtureReport {
                pattern: fixture.pattern.clone(),
                regex: None,
                error: Some(e.to_string()),
                missed: Vec::new(),
                unexpected: Vec::new(),
            }
        }
    }
}

/// Run fixtures in parallel. Reports keep the input order.
pub fn run_fixtures(fixtures: &[Fixture]) -> Vec<FixtureReport> {
    fixtures.par_iter().map(run_fixture).collect()
}

/// Compile each pattern and record whether it was rejected.
pub fn check_invalid(patterns: &[String]) -> Vec<InvalidReport> {
    patterns
        .par_iter()
        .map(|pattern| InvalidReport {
            pattern: pattern.clone(),
            error: compile(pattern).err().map(|e| e.to_string()),
        })
        .collect()
}

/// Run fixtures and invalid-pattern checks together.
pub fn run(fixtures: &[Fixture], invalid: &[String]) -> Summary {
    let (fixtures, invalid) = rayon::join(|| run_fixtures(fixtures), || check_invalid(invalid));
    Summary { fixtures, invalid }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
