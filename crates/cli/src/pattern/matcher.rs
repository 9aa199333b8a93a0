// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matchers built from match patterns.

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use super::{MatchPattern, PatternError};

/// Compiled program size limit in bytes, the regex crate's own default.
pub const SIZE_LIMIT: usize = 10 * (1 << 20);

/// A match pattern compiled to an anchored regular expression.
///
/// Immutable once built and cheap to clone; safe to share across threads.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pattern: String,
    regex: Regex,
}

impl CompiledMatcher {
    /// Compile an already-parsed pattern.
    pub fn new(pattern: &MatchPattern) -> Result<Self, PatternError> {
        Self::with_size_limit(pattern, SIZE_LIMIT)
    }

    /// Compile with an explicit program size limit. Exceeding it is a
    /// [`PatternError::Build`]; no matcher is returned.
    pub fn with_size_limit(pattern: &MatchPattern, size_limit: usize) -> Result<Self, PatternError> {
        let text = pattern.to_string();
        let source = pattern.to_regex();
        tracing::debug!("compiled match pattern {:?} to {}", text, source);
        let regex = RegexBuilder::new(&source)
            .size_limit(size_limit)
            .build()
            .map_err(|source| PatternError::Build { pattern: text.clone(), source })?;
        Ok(Self { pattern: text, regex })
    }

    /// Test whether `candidate` is covered by the pattern.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The regex source this matcher runs.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The match pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Compile a match pattern string into a matcher.
///
/// Fails with [`PatternError::InvalidPattern`] when the string does not follow
/// the grammar and [`PatternError::InvalidHost`] when a required host is absent.
pub fn compile(pattern: &str) -> Result<CompiledMatcher, PatternError> {
    CompiledMatcher::new(&MatchPattern::parse(pattern)?)
}

/// Several match patterns tested together in one pass.
///
/// Answers "which of these patterns cover this URL", as a permission list does.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    patterns: Vec<String>,
    set: RegexSet,
}

impl MatcherSet {
    /// Build a set from pattern strings. The first invalid pattern aborts the build.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_size_limit(patterns, SIZE_LIMIT)
    }

    /// Build a set with an explicit program size limit for the combined set.
    pub fn with_size_limit<I, S>(patterns: I, size_limit: usize) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut texts = Vec::new();
        let mut sources = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            sources.push(MatchPattern::parse(pattern)?.to_regex());
            texts.push(pattern.to_string());
        }

        let set = RegexSetBuilder::new(&sources).size_limit(size_limit).build().map_err(
            |source| PatternError::Build { pattern: texts.join(", "), source },
        )?;
        Ok(Self { patterns: texts, set })
    }

    /// Whether any pattern in the set covers `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.set.is_match(candidate)
    }

    /// Patterns covering `candidate`, in the order they were added.
    pub fn matches(&self, candidate: &str) -> Vec<&str> {
        self.set.matches(candidate).into_iter().map(|i| self.patterns[i].as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
