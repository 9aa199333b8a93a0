// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `matchpat regex` command implementation.

use matchpat::cli::RegexArgs;
use matchpat::compile;
use matchpat::error::ExitCode;

/// Print the regex source a pattern compiles to.
pub fn run(args: &RegexArgs) -> anyhow::Result<ExitCode> {
    let matcher = compile(&args.pattern)?;
    println!("{}", matcher.as_str());
    Ok(ExitCode::Success)
}
