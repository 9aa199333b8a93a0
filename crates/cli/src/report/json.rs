// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use serde_json::json;

use super::UrlCheck;
use crate::harness::Summary;

/// JSON object for a self-test summary.
pub fn summary_json(summary: &Summary) -> serde_json::Value {
    json!({
        "passed": summary.passed(),
        "total": summary.total(),
        "failures": summary.failures(),
        "fixtures": summary.fixtures,
        "invalid": summary.invalid,
    })
}

/// JSON object for URL checks against one pattern.
pub fn url_checks_json(pattern: &str, regex: &str, checks: &[UrlCheck]) -> serde_json::Value {
    json!({
        "pattern": pattern,
        "regex": regex,
        "all_matched": checks.iter().all(|c| c.matched),
        "urls": checks,
    })
}
