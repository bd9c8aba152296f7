// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: CLI entry point for the uinit boot command runner.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! CLI entry point for the uinit boot command runner.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use log::{warn, LevelFilter};
use uinit::command::CommandSpec;
use uinit::config::BootConfig;

/// uinit command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(author = "Lukas Bower", version, about = "Run boot commands in order", long_about = None)]
struct Cli {
    /// TOML file with a `commands` list overriding the built-in sequence.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print each resolved command's program and arguments without running.
    #[arg(long)]
    check: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let (cli, arg_error) = match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => (Cli::default(), Some(err)),
    };
    init_logging(cli.verbose);
    if let Some(err) = arg_error {
        // Init may be handed kernel parameters it does not understand.
        let text = err.to_string();
        warn!("ignoring arguments: {}", text.lines().next().unwrap_or_default());
    }

    let config = BootConfig::load_or_builtin(cli.config.as_deref());

    if cli.check {
        print_plan(&config);
    } else {
        uinit::run(&config);
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn print_plan(config: &BootConfig) {
    let mut out = io::stdout().lock();
    for line in config.commands() {
        let written = match CommandSpec::parse(line) {
            Some(spec) => writeln!(out, "{} {:?}", spec.program(), spec.args()),
            None => writeln!(out, "(skip blank entry)"),
        };
        if let Err(err) = written {
            warn!("failed to write command plan: {err}");
            return;
        }
    }
}
