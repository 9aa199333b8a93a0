//! Behavioral specs for `matchpat test`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Exit 0 when every URL is covered
#[test]
fn all_urls_match_succeeds() {
    matchpat_cmd()
        .args(["test", "https://*/path", "https://mozilla.org/path", "https://a.b.org/path"])
        .assert()
        .success()
        .stdout(predicates::str::contains("match    https://mozilla.org/path"));
}

/// > Exit 1 when any URL is not covered
#[test]
fn uncovered_url_fails() {
    matchpat_cmd()
        .args(["test", "*://*/*", "http://example.org/", "file:///etc/hosts"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("no match file:///etc/hosts"));
}

/// > --quiet prints nothing
#[test]
fn quiet_prints_nothing() {
    matchpat_cmd()
        .args(["test", "--quiet", "ftp://mozilla.org/", "ftp://mozilla.org"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// > JSON output lists each URL
#[test]
fn json_output() {
    let output = matchpat_cmd()
        .args(["test", "-o", "json", "file:///blah/*", "file:///blah/x", "file:///bleh/"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pattern"], "file:///blah/*");
    assert_eq!(value["all_matched"], false);
    assert_eq!(value["urls"][0]["matched"], true);
    assert_eq!(value["urls"][1]["matched"], false);
}
