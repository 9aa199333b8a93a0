// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural parsing of match patterns into typed parts.
//!
//! A pattern is split once against the fixed `scheme://host/path` grammar.
//! Each part then knows how to render itself as a regex fragment, and
//! [`MatchPattern::to_regex`] joins the fragments between fixed anchors.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::PatternError;
use super::scheme::{Scheme, join_schemes};

/// The alias that covers every supported scheme.
pub const ALL_URLS: &str = "<all_urls>";

/// Any character except a line terminator (`\n`, `\r`, U+2028, U+2029).
///
/// Path wildcards and the grammar's path group never cross a line break.
pub const LINE_CHAR: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Structural grammar: scheme, optional host, then the rest of the line after the first `/`.
fn grammar() -> String {
    format!(r"^(\*|http|https|ws|wss|file|ftp|ftps)://(\*|(?:\*\.)?[^/*]+)?/({LINE_CHAR}*)$")
}

#[allow(clippy::expect_used)]
static GRAMMAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&grammar()).expect("valid regex pattern"));

/// Host part of a match pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    /// `*`: any non-empty host.
    Any,
    /// `*.suffix`: the suffix itself or any subdomain of it.
    Subdomains(String),
    /// A literal host; no wildcards.
    Exact(String),
}

impl HostPattern {
    fn parse(text: &str) -> Self {
        if text == "*" {
            HostPattern::Any
        } else if let Some(suffix) = text.strip_prefix("*.") {
            HostPattern::Subdomains(suffix.to_string())
        } else {
            HostPattern::Exact(text.to_string())
        }
    }

    pub fn regex_fragment(&self) -> String {
        match self {
            HostPattern::Any => "[^/]+?".to_string(),
            HostPattern::Subdomains(suffix) => format!(r"(?:[^/]+?\.)?{}", regex::escape(suffix)),
            HostPattern::Exact(host) => regex::escape(host),
        }
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPattern::Any => f.write_str("*"),
            HostPattern::Subdomains(suffix) => write!(f, "*.{suffix}"),
            HostPattern::Exact(host) => f.write_str(host),
        }
    }
}

/// Path part of a match pattern (the text after the first `/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Empty path: the root, with or without its trailing slash.
    Root,
    /// `*`: the root or anything below it.
    Any,
    /// Literal path where each `*` matches any substring.
    Glob(String),
}

impl PathPattern {
    fn parse(text: &str) -> Self {
        match text {
            "" => PathPattern::Root,
            "*" => PathPattern::Any,
            other => PathPattern::Glob(other.to_string()),
        }
    }

    pub fn regex_fragment(&self) -> String {
        match self {
            PathPattern::Root => "/?".to_string(),
            PathPattern::Any => format!("(/{LINE_CHAR}*)?"),
            PathPattern::Glob(raw) => {
                let body = raw
                    .split('*')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(format!("{LINE_CHAR}*?").as_str());
                if raw.starts_with('/') { body } else { format!("/{body}") }
            }
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Root => Ok(()),
            PathPattern::Any => f.write_str("*"),
            PathPattern::Glob(raw) => f.write_str(raw),
        }
    }
}

/// A parsed match pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPattern {
    /// `<all_urls>`.
    AllUrls,
    /// The empty pattern: any supported scheme followed by `://`.
    AnyScheme,
    /// `scheme://host/path`. `host` is only absent for `file`.
    Url { scheme: Scheme, host: Option<HostPattern>, path: PathPattern },
}

impl MatchPattern {
    /// Parse a pattern string against the match pattern grammar.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Ok(MatchPattern::AnyScheme);
        }
        if pattern == ALL_URLS {
            return Ok(MatchPattern::AllUrls);
        }

        let invalid = || PatternError::InvalidPattern(pattern.to_string());
        let caps = GRAMMAR_REGEX.captures(pattern).ok_or_else(invalid)?;

        let scheme = caps.get(1).and_then(|m| Scheme::parse(m.as_str())).ok_or_else(invalid)?;
        let host = caps.get(2).map(|m| HostPattern::parse(m.as_str()));
        if host.is_none() && scheme.requires_host() {
            return Err(PatternError::InvalidHost(pattern.to_string()));
        }
        let path = PathPattern::parse(caps.get(3).map_or("", |m| m.as_str()));

        Ok(MatchPattern::Url { scheme, host, path })
    }

    /// Regex source equivalent to this pattern.
    ///
    /// Grammar patterns are anchored at both ends. `<all_urls>` and the
    /// empty pattern only anchor the scheme prefix.
    pub fn to_regex(&self) -> String {
        match self {
            MatchPattern::AllUrls | MatchPattern::AnyScheme => {
                format!("^(?:{})://", join_schemes(&Scheme::CONCRETE))
            }
            MatchPattern::Url { scheme, host, path } => {
                let host = host.as_ref().map(HostPattern::regex_fragment).unwrap_or_default();
                format!("^{}://{}{}$", scheme.regex_fragment(), host, path.regex_fragment())
            }
        }
    }
}

impl FromStr for MatchPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPattern::AllUrls => f.write_str(ALL_URLS),
            MatchPattern::AnyScheme => Ok(()),
            MatchPattern::Url { scheme, host, path } => {
                write!(f, "{scheme}://")?;
                if let Some(host) = host {
                    write!(f, "{host}")?;
                }
                write!(f, "/{path}")
            }
        }
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
