// src/bin/inspecta.rs
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inspecta_core::cli::{self, Cli};
use inspecta_core::exit::InspectExit;

fn main() -> InspectExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    InspectExit::from(cli::dispatch(&cli))
}

/// Logs go to stderr so stdout stays usable for `--json`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
