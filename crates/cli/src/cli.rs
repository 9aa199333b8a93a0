// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Compile browser-extension match patterns into regular expressions
#[derive(Parser)]
#[command(name = "matchpat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the regular expression for a pattern
    Regex(RegexArgs),
    /// Test URLs against a pattern
    Test(TestArgs),
    /// List the patterns that cover a URL
    Which(WhichArgs),
    /// Run the fixture self test
    Selftest(SelftestArgs),
}

#[derive(clap::Args)]
pub struct RegexArgs {
    /// Match pattern, e.g. "*://*.example.org/*"
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Match pattern, e.g. "*://*.example.org/*"
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// URLs to test
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args)]
pub struct WhichArgs {
    /// URL to look up
    #[arg(value_name = "URL")]
    pub url: String,

    /// Candidate patterns (repeatable)
    #[arg(short, long = "pattern", value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

#[derive(clap::Args)]
pub struct SelftestArgs {
    /// Use specific config file instead of discovering matchpat.toml
    #[arg(short = 'C', long = "config", env = "MATCHPAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Skip the builtin fixture table
    #[arg(long)]
    pub no_builtin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
