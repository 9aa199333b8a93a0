// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_regex;
mod cmd_selftest;
mod cmd_which;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use matchpat::cli::{Cli, Command};
use matchpat::config::defaults::{LOG_ENV, LOG_FILTER};
use matchpat::error::{Error, ExitCode};
use matchpat::pattern::PatternError;

/// Install the stderr log subscriber, filtered by `MATCHPAT_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Map a command failure to its exit code.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if let Some(e) = err.downcast_ref::<Error>() {
        e.exit_code()
    } else if err.downcast_ref::<PatternError>().is_some() {
        ExitCode::ConfigError
    } else {
        ExitCode::InternalError
    }
}

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Regex(args) => cmd_regex::run(args),
        Command::Test(args) => cmd_test::run(args),
        Command::Which(args) => cmd_which::run(args),
        Command::Selftest(args) => cmd_selftest::run(args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("matchpat: {err:#}");
            exit_code_for(&err).into()
        }
    }
}
