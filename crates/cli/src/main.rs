// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Taboo CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use taboo::cli::{Cli, Command};
use taboo::error::ExitCode;

mod cmd_check;
mod cmd_scan;
mod cmd_transform;

fn init_logging() {
    let filter = EnvFilter::try_from_env("TABOO_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("taboo: {}", e);
            match e.downcast_ref::<taboo::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Mask(args)) => cmd_transform::mask(&cli, args),
        Some(Command::Strip(args)) => cmd_transform::strip(&cli, args),
        Some(Command::Denoise(args)) => cmd_transform::denoise(&cli, args),
        Some(Command::Completions(args)) => {
            taboo::completions::write_script(args.shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
