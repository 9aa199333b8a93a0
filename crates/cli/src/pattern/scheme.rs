// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! URL scheme tokens accepted by match patterns.

use std::fmt;

/// A scheme token from the `scheme://` part of a match pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `*`: any of http, https, ws, wss.
    Any,
    Http,
    Https,
    Ws,
    Wss,
    File,
    Ftp,
    Ftps,
}

impl Scheme {
    /// Every concrete scheme, in the order the empty pattern lists them.
    pub const CONCRETE: [Scheme; 7] = [
        Scheme::Http,
        Scheme::Https,
        Scheme::Ws,
        Scheme::Wss,
        Scheme::File,
        Scheme::Ftp,
        Scheme::Ftps,
    ];

    /// Schemes covered by the `*` wildcard. file, ftp and ftps are never included.
    pub const WILDCARD: [Scheme; 4] = [Scheme::Http, Scheme::Https, Scheme::Ws, Scheme::Wss];

    /// Parse a scheme token. Returns `None` for anything outside the fixed set.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "*" => Some(Scheme::Any),
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            "ws" => Some(Scheme::Ws),
            "wss" => Some(Scheme::Wss),
            "file" => Some(Scheme::File),
            "ftp" => Some(Scheme::Ftp),
            "ftps" => Some(Scheme::Ftps),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Any => "*",
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Ws => "ws",
            Scheme::Wss => "wss",
            Scheme::File => "file",
            Scheme::Ftp => "ftp",
            Scheme::Ftps => "ftps",
        }
    }

    /// Whether a pattern with this scheme must name a host.
    ///
    /// File URLs have no authority component, so `file:///path` is valid.
    pub fn requires_host(self) -> bool {
        self != Scheme::File
    }

    /// Regex fragment matching this scheme token in a URL.
    pub fn regex_fragment(self) -> String {
        match self {
            Scheme::Any => format!("({})", join_schemes(&Self::WILDCARD)),
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join scheme tokens into a regex alternation body (`http|https|...`).
pub(crate) fn join_schemes(schemes: &[Scheme]) -> String {
    schemes.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("|")
}

#[cfg(test)]
#[path = "scheme_tests.rs"]
mod tests;
