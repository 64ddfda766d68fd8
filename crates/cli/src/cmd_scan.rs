// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! `taboo scan` — list every vocabulary hit in the input.

use taboo::cli::{Cli, OutputFormat, ScanArgs};
use taboo::color::ColorMode;
use taboo::error::ExitCode;
use taboo::output::{JsonFormatter, ScanReport, TextFormatter};
use taboo::reader;

pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let filter = reader::build_filter(&cli.wordlist, &cli.words, cli.noise.as_deref())?;
    let text = reader::resolve_text(args.text.as_deref())?;

    let report = ScanReport::new(filter.find_all(&text));

    match args.output {
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout()).write(&report)?;
        }
        OutputFormat::Text => {
            let mode = ColorMode::from_flags(args.color, args.no_color);
            TextFormatter::new(mode.stdout()).write(&report)?;
        }
    }

    Ok(if report.clean {
        ExitCode::Success
    } else {
        ExitCode::MatchFound
    })
}
