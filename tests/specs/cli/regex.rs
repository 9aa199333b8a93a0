//! Behavioral specs for `matchpat regex`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Prints the anchored regex for a pattern
#[test]
fn prints_regex_for_pattern() {
    matchpat_cmd()
        .args(["regex", "*://*.mozilla.org/*"])
        .assert()
        .success()
        .stdout(concat!(
            r"^(http|https|ws|wss)://(?:[^/]+?\.)?mozilla\.org(/[^\n\r\x{2028}\x{2029}]*)?$",
            "\n"
        ));
}

/// > The empty pattern compiles to a scheme prefix matcher
#[test]
fn empty_pattern_prints_prefix_regex() {
    matchpat_cmd()
        .args(["regex", ""])
        .assert()
        .success()
        .stdout("^(?:http|https|ws|wss|file|ftp|ftps)://\n");
}

/// > Malformed patterns exit 2 with the pattern named on stderr
#[test]
fn invalid_pattern_exits_config_error() {
    matchpat_cmd()
        .args(["regex", "example.org"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("\"example.org\" is not a valid match pattern"));
}

/// > Missing host for a non-file scheme is reported as a host error
#[test]
fn missing_host_exits_config_error() {
    matchpat_cmd()
        .args(["regex", "https:///path"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("does not have a valid host"));
}

/// > --config belongs to selftest only
#[test]
fn config_flag_is_rejected() {
    matchpat_cmd()
        .args(["regex", "*://*/*", "-C", "matchpat.toml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unexpected argument"));
}
