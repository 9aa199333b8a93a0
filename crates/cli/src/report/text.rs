// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::{self, Write};

use termcolor::WriteColor;

use super::UrlCheck;
use crate::color::scheme;
use crate::harness::{FixtureReport, InvalidReport, Summary};

fn write_status<W: WriteColor>(writer: &mut W, passed: bool) -> io::Result<()> {
    if passed {
        writer.set_color(&scheme::pass())?;
        write!(writer, "PASS")?;
    } else {
        writer.set_color(&scheme::fail())?;
        write!(writer, "FAIL")?;
    }
    writer.reset()
}

fn write_fixture<W: WriteColor>(writer: &mut W, report: &FixtureReport) -> io::Result<()> {
    write_status(writer, report.passed())?;
    write!(writer, " ")?;
    writer.set_color(&scheme::pattern())?;
    write!(writer, "{:?}", report.pattern)?;
    writer.reset()?;
    if let Some(ref regex) = report.regex {
        write!(writer, " ")?;
        writer.set_color(&scheme::detail())?;
        write!(writer, "{regex}")?;
        writer.reset()?;
    }
    writeln!(writer)?;

    if let Some(ref error) = report.error {
        writeln!(writer, "  error: {error}")?;
    }
    for url in &report.missed {
        writeln!(writer, "  missed: {url}")?;
    }
    for url in &report.unexpected {
        writeln!(writer, "  unexpected: {url}")?;
    }
    Ok(())
}

fn write_invalid<W: WriteColor>(writer: &mut W, report: &InvalidReport) -> io::Result<()> {
    write_status(writer, report.passed())?;
    write!(writer, " invalid ")?;
    writer.set_color(&scheme::pattern())?;
    write!(writer, "{:?}", report.pattern)?;
    writer.reset()?;
    match report.error {
        Some(ref error) => writeln!(writer, " ({error})"),
        None => writeln!(writer, " (compiled)"),
    }
}

/// Write one line per fixture and invalid pattern, then a summary line.
pub fn write_summary_text<W: WriteColor>(writer: &mut W, summary: &Summary) -> io::Result<()> {
    for report in &summary.fixtures {
        write_fixture(writer, report)?;
    }
    for report in &summary.invalid {
        write_invalid(writer, report)?;
    }

    let failures = summary.failures();
    writeln!(writer)?;
    writeln!(writer, "{} passed, {} failed", summary.total() - failures, failures)
}

/// Write one line per URL: `match` or `no match`, then the URL.
pub fn write_url_checks_text<W: WriteColor>(writer: &mut W, checks: &[UrlCheck]) -> io::Result<()> {
    for check in checks {
        if check.matched {
            writer.set_color(&scheme::pass())?;
            write!(writer, "match   ")?;
        } else {
            writer.set_color(&scheme::fail())?;
            write!(writer, "no match")?;
        }
        writer.reset()?;
        writer.set_color(&scheme::url())?;
        writeln!(writer, " {}", check.url)?;
        writer.reset()?;
    }
    Ok(())
}
