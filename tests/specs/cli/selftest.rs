//! Behavioral specs for `matchpat selftest`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Builtin fixtures pass without any config
#[test]
fn builtin_fixtures_pass() {
    let project = Project::empty();
    matchpat_cmd()
        .args(["selftest", "--no-color"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("PASS \"*://*.mozilla.org/*\""))
        .stdout(predicates::str::contains("FAIL").not())
        .stdout(predicates::str::contains(" 0 failed"));
}

/// > Configured fixtures run after builtin ones and can fail the run
#[test]
fn configured_failure_exits_one() {
    let project = Project::with_config(
        r#"version = 1

[[selftest.fixture]]
pattern = "https://example.org/"
accept = ["https://example.org/deep"]
"#,
    );
    matchpat_cmd()
        .args(["selftest", "--no-color"])
        .current_dir(project.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("missed: https://example.org/deep"))
        .stdout(predicates::str::contains("1 failed"));
}

/// > --no-builtin runs only configured fixtures
#[test]
fn no_builtin_runs_configured_only() {
    let project = Project::with_config(
        r#"version = 1

[selftest]
invalid = ["http://*./"]

[[selftest.fixture]]
pattern = "ws://example.org/*"
accept = ["ws://example.org/chat"]
reject = ["wss://example.org/chat"]
"#,
    );
    let output = matchpat_cmd()
        .args(["selftest", "--no-builtin", "-o", "json"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], true);
    assert_eq!(value["total"], 2);
    assert_eq!(value["fixtures"][0]["pattern"], "ws://example.org/*");
    assert_eq!(value["invalid"][0]["pattern"], "http://*./");
}

/// > An explicit --config path is used instead of discovery
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    let other = Project::with_config(
        r#"version = 1

[selftest]
builtin = false
invalid = ["*://*/*"]
"#,
    );
    matchpat_cmd()
        .args(["selftest", "--no-color", "-C"])
        .arg(other.path().join("matchpat.toml"))
        .current_dir(project.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("(compiled)"));
}

/// > The shipped fixture project passes
#[test]
fn fixture_project_passes() {
    matchpat_cmd()
        .args(["selftest", "--no-color"])
        .current_dir(fixture("selftest"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PASS \"https://*.example.org/*\""));
}
