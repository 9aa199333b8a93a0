// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `matchpat selftest` command implementation.
//!
//! Runs the builtin fixture table plus any fixtures from matchpat.toml.

use std::io::Write;

use termcolor::StandardStream;

use matchpat::cli::SelftestArgs;
use matchpat::config;
use matchpat::error::ExitCode;
use matchpat::harness;
use matchpat::report;

/// Run the self test.
pub fn run(args: &SelftestArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(args.config.as_deref(), &cwd)?;
    let include_builtin = !args.no_builtin;
    let fixtures = config.selftest.fixtures(include_builtin);
    let invalid = config.selftest.invalid(include_builtin);

    if fixtures.is_empty() && invalid.is_empty() {
        tracing::warn!("no fixtures to run");
    }

    let summary = harness::run(&fixtures, &invalid);

    let mut stdout = StandardStream::stdout(args.color.choice(args.no_color));
    report::write_summary(&mut stdout, &summary, args.output)?;
    stdout.flush()?;

    if summary.passed() { Ok(ExitCode::Success) } else { Ok(ExitCode::CheckFailed) }
}
