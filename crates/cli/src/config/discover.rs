// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the config that applies to a run.
//!
//! Precedence: an explicit path (`-C` / `MATCHPAT_CONFIG`), then the nearest
//! `matchpat.toml` at or above the working directory, bounded by the git
//! root, then built-in defaults.

use std::path::{Path, PathBuf};

use super::{Config, defaults, load};
use crate::error::Result;

/// Nearest `matchpat.toml` path from `start` upwards. The directory holding
/// `.git` is the last one searched.
pub fn find_file(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(defaults::FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Load the nearest config above `start`, if there is one.
pub fn discover(start: &Path) -> Result<Option<Config>> {
    match find_file(start) {
        Some(path) => {
            tracing::debug!("discovered config at {}", path.display());
            load(&path).map(Some)
        }
        None => {
            tracing::debug!("no {} above {}", defaults::FILE_NAME, start.display());
            Ok(None)
        }
    }
}

/// Resolve the config for a run: explicit path, discovered file, or defaults.
///
/// An explicit path that cannot be read is an error; it never falls back.
pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }
    Ok(discover(start)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
