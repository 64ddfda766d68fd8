// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! `taboo mask`, `taboo strip`, `taboo denoise` — text rewriting.
//!
//! Mask and strip operate on the verbatim input (no noise pre-pass);
//! pipe through `taboo denoise` first for noise-tolerant rewriting.

use taboo::cli::{Cli, MaskArgs, TextArgs};
use taboo::error::ExitCode;
use taboo::reader;

pub fn mask(cli: &Cli, args: &MaskArgs) -> anyhow::Result<ExitCode> {
    let filter = reader::build_filter(&cli.wordlist, &cli.words, cli.noise.as_deref())?;
    let text = reader::resolve_text(args.text.as_deref())?;
    println!("{}", filter.replace(&text, args.mask_char));
    Ok(ExitCode::Success)
}

pub fn strip(cli: &Cli, args: &TextArgs) -> anyhow::Result<ExitCode> {
    let filter = reader::build_filter(&cli.wordlist, &cli.words, cli.noise.as_deref())?;
    let text = reader::resolve_text(args.text.as_deref())?;
    println!("{}", filter.filter(&text));
    Ok(ExitCode::Success)
}

pub fn denoise(cli: &Cli, args: &TextArgs) -> anyhow::Result<ExitCode> {
    let filter = reader::build_filter(&cli.wordlist, &cli.words, cli.noise.as_deref())?;
    let text = reader::resolve_text(args.text.as_deref())?;
    println!("{}", filter.strip_noise(&text));
    Ok(ExitCode::Success)
}
