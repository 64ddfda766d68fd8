// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Detect, mask, and validate sensitive words in text
#[derive(Parser)]
#[command(name = "taboo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Wordlist file, one vocabulary entry per line (repeatable)
    #[arg(
        short = 'w',
        long = "wordlist",
        global = true,
        env = "TABOO_WORDLIST",
        value_name = "FILE"
    )]
    pub wordlist: Vec<PathBuf>,

    /// Inline vocabulary entries
    #[arg(long = "words", global = true, value_delimiter = ',', value_name = "WORD")]
    pub words: Vec<String>,

    /// Override the noise-stripping pattern (regex)
    #[arg(long = "noise", global = true, value_name = "PATTERN")]
    pub noise: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate text; exit 1 when a vocabulary entry matches
    Check(CheckArgs),
    /// List every vocabulary hit in the text
    Scan(ScanArgs),
    /// Mask vocabulary hits with a replacement character
    Mask(MaskArgs),
    /// Remove vocabulary hits from the text
    Strip(TextArgs),
    /// Strip noise characters only, without matching
    Denoise(TextArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Text to check (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Treat CHAR in the text as matching any single code point
    #[arg(long, value_name = "CHAR")]
    pub wildcard: Option<char>,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Text to scan (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct MaskArgs {
    /// Text to mask (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Replacement character
    #[arg(short = 'c', long = "char", default_value_t = '*', value_name = "CHAR")]
    pub mask_char: char,
}

#[derive(clap::Args)]
pub struct TextArgs {
    /// Text to process (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate a script for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
