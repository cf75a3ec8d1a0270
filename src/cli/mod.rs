// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, ReportArgs};

use anyhow::Result;

use crate::exit::InspectExit;

/// Runs the selected subcommand.
///
/// # Errors
/// Propagates handler errors.
pub fn dispatch(cli: &Cli) -> Result<InspectExit> {
    match &cli.command {
        Commands::Report(args) => handlers::handle_report(args),
        Commands::Init { config, force } => handlers::handle_init(config, *force),
    }
}
