// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color resolution and the output color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against `--no-color` and the `NO_COLOR` environment variable.
    pub fn choice(self, no_color_flag: bool) -> ColorChoice {
        let no_color = no_color_flag
            || self == ColorMode::Never
            || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        resolve_color(self == ColorMode::Always, no_color)
    }
}

/// Pick a color choice. `no_color` wins over `force`.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color specs used by reports.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Matching URL or passing fixture.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Non-matching URL or failing fixture.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Secondary detail such as regex source.
    pub fn detail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    pub fn url() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
