//! repogen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod prompt;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::style;
use repogen::observability::ObservabilityConfig;

pub use commands::{GenerateCommand, StubsCommand};
pub use prompt::TerminalConfirm;

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "repogen")]
#[command(version)]
#[command(about = "Generate repository-pattern files from stubs", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate controller, model, request, repository, resource,
    /// collection and policy files for an entity
    Generate(GenerateCommand),
    /// Manage customizable stubs
    Stubs {
        /// Stubs subcommand to execute
        #[command(subcommand)]
        command: StubsCommand,
    },
}

impl Cli {
    /// Logging configuration selected by the global flags
    #[must_use]
    pub fn observability(&self) -> ObservabilityConfig {
        let config = ObservabilityConfig::for_verbosity(self.verbose);
        if self.log_json {
            config.with_json()
        } else {
            config
        }
    }
}

/// Run a parsed command line
///
/// Errors are printed to stderr and mapped to [`ExitCode::FAILURE`].
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Commands::Generate(command) => command.execute(),
        Commands::Stubs { command } => command.execute(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
