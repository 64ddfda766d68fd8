// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Shell completion script generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to `writer`.
pub fn write_script<W: io::Write>(shell: Shell, writer: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "taboo", writer);
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
