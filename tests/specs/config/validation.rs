//! Behavioral specs for config validation.
//!
//! Tests that matchpat correctly handles:
//! - Unknown config keys (errors)
//! - Unknown nested keys (errors)
//! - Unsupported versions (errors)
//! - Valid config (no errors)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// CONFIG VALIDATION SPECS
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    temp.config(
        r#"version = 1
unknown_key = true
"#,
    );

    matchpat_cmd()
        .arg("selftest")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unknown nested keys are errors
#[test]
fn unknown_nested_config_key_fails() {
    let temp = Project::empty();
    temp.config(&format!(
        r#"{MINIMAL_CONFIG}
[selftest]
fixtures = []
"#
    ));

    matchpat_cmd()
        .arg("selftest")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Only version 1 is supported
#[test]
fn unsupported_version_fails() {
    let temp = Project::with_config("version = 7\n");

    matchpat_cmd()
        .arg("selftest")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 7"));
}

/// > Valid config runs cleanly
#[test]
fn valid_config_succeeds() {
    let temp = Project::with_config(MINIMAL_CONFIG);

    matchpat_cmd().arg("selftest").current_dir(temp.path()).assert().success();
}

/// > Missing explicit config file is an internal error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();

    matchpat_cmd()
        .args(["selftest", "-C", "does-not-exist.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicates::str::contains("failed to read"));
}
