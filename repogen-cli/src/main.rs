//! repogen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use repogen::observability;
use repogen_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = observability::init(&cli.observability()) {
        eprintln!("failed to initialize logging: {err}");
    }

    repogen_cli::run(cli)
}
