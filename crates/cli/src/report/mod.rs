// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for self-test summaries and URL checks.
//!
//! Text output goes through termcolor so color can be switched off; JSON
//! output is built with serde_json.

mod json;
mod text;

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::harness::Summary;

pub use json::{summary_json, url_checks_json};
pub use text::{write_summary_text, write_url_checks_text};

/// Result of testing one URL against a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlCheck {
    pub url: String,
    pub matched: bool,
}

/// Write a self-test summary in the requested format.
pub fn write_summary<W: WriteColor>(
    writer: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_summary_text(writer, summary),
        OutputFormat::Json => write_json(writer, &summary_json(summary)),
    }
}

/// Write URL check results for one pattern in the requested format.
pub fn write_url_checks<W: WriteColor>(
    writer: &mut W,
    pattern: &str,
    regex: &str,
    checks: &[UrlCheck],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_url_checks_text(writer, checks),
        OutputFormat::Json => write_json(writer, &url_checks_json(pattern, regex, checks)),
    }
}

fn write_json<W: io::Write>(writer: &mut W, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
