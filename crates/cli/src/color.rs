// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Color detection for terminal output.
//!
//! Resolution order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR=1 env var → no color
//! 3. COLOR=1 env var → color
//! 4. default: color only when stdout is a TTY

use std::io::IsTerminal;

use termcolor::{ColorChoice, StandardStream};

/// Color mode resolved from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve from the `--color` / `--no-color` flag pair. Disabling
    /// wins when both are given.
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        if no_color {
            ColorMode::Never
        } else if color {
            ColorMode::Always
        } else {
            ColorMode::Auto
        }
    }

    /// Whether output should be colorized.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
                    return false;
                }
                if std::env::var("COLOR").is_ok_and(|v| v == "1") {
                    return true;
                }
                std::io::stdout().is_terminal()
            }
        }
    }

    /// A stdout stream honoring this mode.
    pub fn stdout(self) -> StandardStream {
        let choice = if self.enabled() {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        StandardStream::stdout(choice)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
