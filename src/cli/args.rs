use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "inspecta",
    version,
    about = "Turns inspection results into build verdicts and reports"
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a problem stream into reports and a pass/fail verdict
    Report(ReportArgs),
    /// Write a default inspections.toml
    Init {
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// JSON array of problems produced by the analysis engine
    #[arg(long, short, value_name = "FILE")]
    pub problems: PathBuf,
    #[arg(long, short, default_value = CONFIG_FILE, value_name = "FILE")]
    pub config: PathBuf,
    /// Directory problem file paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Log a failed verdict instead of failing the build
    #[arg(long)]
    pub ignore_failures: bool,
    /// Do not print violations as they are reported
    #[arg(long, short)]
    pub quiet: bool,
    /// Print the run outcome as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
