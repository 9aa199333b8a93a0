// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Current config format version.
pub const VERSION: i64 = 1;

/// Config file name looked up by discovery.
pub const FILE_NAME: &str = "matchpat.toml";

/// Whether the builtin fixture table runs unless disabled.
pub const SELFTEST_BUILTIN: bool = true;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MATCHPAT_LOG";

/// Log filter used when [`LOG_ENV`] is unset.
pub const LOG_FILTER: &str = "warn";
