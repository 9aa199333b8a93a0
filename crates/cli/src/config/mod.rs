// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `matchpat.toml`.
//!
//! Unknown keys are errors. A missing `[selftest]` table falls back to the
//! builtin fixture table with no extra fixtures.

pub mod defaults;
mod discover;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::harness::{self, Fixture};

pub use discover::{discover, find_file, resolve};

/// Top-level `matchpat.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version. Only [`defaults::VERSION`] is accepted.
    pub version: i64,

    #[serde(default)]
    pub selftest: SelftestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: defaults::VERSION, selftest: SelftestConfig::default() }
    }
}

/// `[selftest]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelftestConfig {
    /// Include the builtin fixture table (default: true).
    #[serde(default = "SelftestConfig::default_builtin")]
    pub builtin: bool,

    /// Extra patterns that must fail to compile.
    #[serde(default)]
    pub invalid: Vec<String>,

    /// Extra `[[selftest.fixture]]` entries.
    #[serde(default, rename = "fixture")]
    pub fixtures: Vec<Fixture>,
}

impl Default for SelftestConfig {
    fn default() -> Self {
        Self { builtin: Self::default_builtin(), invalid: Vec::new(), fixtures: Vec::new() }
    }
}

impl SelftestConfig {
    pub(crate) fn default_builtin() -> bool {
        defaults::SELFTEST_BUILTIN
    }

    /// Fixtures to run: builtin ones first (unless disabled), then configured ones.
    pub fn fixtures(&self, include_builtin: bool) -> Vec<Fixture> {
        let mut fixtures =
            if self.builtin && include_builtin { harness::builtin_fixtures() } else { Vec::new() };
        fixtures.extend(self.fixtures.iter().cloned());
        fixtures
    }

    /// Patterns expected to be rejected: builtin ones first (unless disabled).
    pub fn invalid(&self, include_builtin: bool) -> Vec<String> {
        let mut invalid =
            if self.builtin && include_builtin { harness::builtin_invalid() } else { Vec::new() };
        invalid.extend(self.invalid.iter().cloned());
        invalid
    }
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.to_string() })?;

    if config.version != defaults::VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version,
                defaults::VERSION
            ),
        });
    }

    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!(
        "loaded config {} ({} fixtures, {} invalid)",
        path.display(),
        config.selftest.fixtures.len(),
        config.selftest.invalid.len()
    );
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
