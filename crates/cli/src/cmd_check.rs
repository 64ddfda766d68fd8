// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! `taboo check` — validate text against the vocabulary.

use taboo::cli::{CheckArgs, Cli};
use taboo::error::ExitCode;
use taboo::reader;

pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let filter = reader::build_filter(&cli.wordlist, &cli.words, cli.noise.as_deref())?;
    let text = reader::resolve_text(args.text.as_deref())?;

    let hit = match args.wildcard {
        Some(wildcard) => filter.validate_with_wildcard(&text, wildcard),
        None => filter.validate(&text),
    };

    match hit {
        Some(word) => {
            tracing::debug!("offending entry: {}", word);
            println!("match: {}", word);
            Ok(ExitCode::MatchFound)
        }
        None => {
            println!("clean");
            Ok(ExitCode::Success)
        }
    }
}
