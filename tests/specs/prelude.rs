//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing matchpat CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;
use tempfile::TempDir;

/// Smallest valid matchpat.toml.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the matchpat binary.
///
/// Logging and color environment are cleared so output is stable.
pub fn matchpat_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("matchpat"));
    cmd.env_remove("MATCHPAT_CONFIG").env_remove("MATCHPAT_LOG");
    cmd
}

/// A temporary project directory with an optional matchpat.toml.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty directory containing only a `.git` marker, so config
    /// discovery never escapes it.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with the given matchpat.toml content.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.config(content);
        project
    }

    pub fn config(&self, content: &str) {
        std::fs::write(self.dir.path().join("matchpat.toml"), content).unwrap();
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
