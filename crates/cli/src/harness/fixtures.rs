// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builtin fixture table.
//!
//! Mirrors the examples published with the WebExtensions match pattern
//! documentation, plus the empty pattern.

use super::Fixture;

/// (pattern, accepted URLs, rejected URLs)
type Row = (&'static str, &'static [&'static str], &'static [&'static str]);

const BUILTIN: &[Row] = &[
    (
        "",
        &["http://example.org/", "https://a.org/x", "ftp://x/"],
        &["gopher://x/", "example.org"],
    ),
    (
        "<all_urls>",
        &[
            "http://example.org/",
            "https://a.org/some/path/",
            "ws://sockets.somewhere.org/",
            "wss://ws.example.com/stuff/",
            "ftp://files.somewhere.org/",
            "ftps://files.somewhere.org/",
        ],
        &[],
    ),
    (
        "*://*/*",
        &[
            "http://example.org/",
            "https://a.org/some/path/",
            "ws://sockets.somewhere.org/",
            "wss://ws.example.com/stuff/",
        ],
        &["ftp://ftp.example.org/", "ftps://ftp.example.org/", "file:///a/"],
    ),
    (
        "*://*.mozilla.org/*",
        &[
            "http://mozilla.org/",
            "https://mozilla.org/",
            "http://a.mozilla.org/",
            "http://a.b.mozilla.org/",
            "https://b.mozilla.org/path/",
            "ws://ws.mozilla.org/",
            "wss://secure.mozilla.org/something",
        ],
        &["ftp://mozilla.org/", "http://mozilla.com/", "http://firefox.org/"],
    ),
    (
        "*://mozilla.org/",
        &["http://mozilla.org/", "https://mozilla.org/", "ws://mozilla.org/", "wss://mozilla.org/"],
        &["ftp://mozilla.org/", "http://a.mozilla.org/", "http://mozilla.org/a"],
    ),
    (
        "ftp://mozilla.org/",
        &["ftp://mozilla.org"],
        &["http://mozilla.org/", "ftp://sub.mozilla.org/", "ftp://mozilla.org/path"],
    ),
    (
        "https://*/path",
        &["https://mozilla.org/path", "https://a.mozilla.org/path", "https://something.com/path"],
        &[
            "http://mozilla.org/path",
            "https://mozilla.org/path/",
            "https://mozilla.org/a",
            "https://mozilla.org/",
        ],
    ),
    (
        "https://*/path/",
        &[
            "https://mozilla.org/path/",
            "https://a.mozilla.org/path/",
            "https://something.com/path/",
        ],
        &[
            "http://mozilla.org/path/",
            "https://mozilla.org/path",
            "https://mozilla.org/a",
            "https://mozilla.org/",
        ],
    ),
    (
        "https://mozilla.org/*",
        &[
            "https://mozilla.org/",
            "https://mozilla.org/path",
            "https://mozilla.org/another",
            "https://mozilla.org/path/to/doc",
        ],
        &["http://mozilla.org/path", "https://mozilla.com/path"],
    ),
    (
        "https://mozilla.org/a/b/c/",
        &["https://mozilla.org/a/b/c/"],
        &["https://yomozilla.org/a/b/c/", "https://mozilla.org/a/b/c", "http://mozilla.org/a/b/c/"],
    ),
    (
        "https://mozilla.org/*/b/*/",
        &["https://mozilla.org/a/b/c/", "https://mozilla.org/d/b/f/", "https://mozilla.org/a/b/c/d/"],
        &["https://mozilla.org/b/*/", "https://mozilla.org/a/b/"],
    ),
    ("file:///blah/*", &["file:///blah/", "file:///blah/bleh"], &["file:///bleh/"]),
];

/// Patterns that must never compile.
const INVALID: &[&str] = &[
    "example.org",
    "http://",
    "gopher://example.org/",
    "http://*foo/",
    "http://foo.*.bar/",
    "http://*./",
    "https:///path",
    "*:///",
];

/// The builtin fixture table.
pub fn builtin_fixtures() -> Vec<Fixture> {
    BUILTIN
        .iter()
        .map(|(pattern, accept, reject)| Fixture {
            pattern: pattern.to_string(),
            accept: accept.iter().map(|s| s.to_string()).collect(),
            reject: reject.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

/// Builtin patterns expected to fail compilation.
pub fn builtin_invalid() -> Vec<String> {
    INVALID.iter().map(|s| s.to_string()).collect()
}
