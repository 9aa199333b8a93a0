// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `matchpat which` command implementation.

use matchpat::MatcherSet;
use matchpat::cli::WhichArgs;
use matchpat::error::ExitCode;

/// Print every candidate pattern covering the URL, one per line.
pub fn run(args: &WhichArgs) -> anyhow::Result<ExitCode> {
    let set = MatcherSet::new(&args.patterns)?;
    let matches = set.matches(&args.url);
    tracing::debug!("{} of {} patterns cover {}", matches.len(), set.len(), args.url);

    for pattern in &matches {
        println!("{pattern}");
    }

    if matches.is_empty() { Ok(ExitCode::CheckFailed) } else { Ok(ExitCode::Success) }
}
