//! Behavioral specs for `matchpat which`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Lists covering patterns in the order given
#[test]
fn lists_covering_patterns() {
    matchpat_cmd()
        .args([
            "which",
            "https://developer.mozilla.org/docs",
            "-p",
            "https://*/*",
            "-p",
            "http://*/*",
            "-p",
            "*://*.mozilla.org/*",
        ])
        .assert()
        .success()
        .stdout("https://*/*\n*://*.mozilla.org/*\n");
}

/// > Exit 1 when nothing covers the URL
#[test]
fn no_covering_pattern_fails() {
    matchpat_cmd()
        .args(["which", "ftp://mozilla.org/", "-p", "*://*/*"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::is_empty());
}

/// > One invalid candidate rejects the whole set
#[test]
fn invalid_candidate_fails() {
    matchpat_cmd()
        .args(["which", "http://a.org/", "-p", "*://*/*", "-p", "http://*foo/"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("http://*foo/"));
}
