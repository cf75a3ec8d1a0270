// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::warn;

use crate::cli::args::ReportArgs;
use crate::config::{io, InspectionsToml, ReportsConfig};
use crate::exit::InspectExit;
use crate::input::{self, SourceIndex};
use crate::pipeline::{ReportPipeline, RunOutcome};
use crate::reporting::{
    ConsoleReport, FileSink, HtmlReport, JsonReport, ReportFormat, ReportGenerator, TextReport,
};
use crate::types::Verdict;

/// Handles the report command.
///
/// # Errors
/// Returns error if the config or problem stream cannot be loaded.
pub fn handle_report(args: &ReportArgs) -> Result<InspectExit> {
    let config = InspectionsToml::load(&args.config)?;
    let problems = input::read_problems(&args.problems)?;
    let index = SourceIndex::build(&args.root, &problems);

    let show = config.reports.show_violations && !args.quiet && !args.json;
    let pipeline = ReportPipeline::new(
        config.classifier(),
        config.thresholds.budget(),
        build_generators(&config.reports, show),
    );
    for problem in problems {
        pipeline.submit(index.resolve(problem));
    }
    let outcome = pipeline.finish();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("serializing run outcome")?
        );
    } else {
        print_outcome(&outcome);
    }

    let ignore = args.ignore_failures || config.reports.ignore_failures;
    Ok(verdict_exit(&outcome.verdict, ignore))
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(path: &Path, force: bool) -> Result<InspectExit> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    io::save_default(path)?;
    println!("{} {}", "Created".green().bold(), path.display());
    Ok(InspectExit::Success)
}

/// One generator per enabled file format, plus the console when violations
/// are shown.
#[must_use]
pub fn build_generators(
    reports: &ReportsConfig,
    show_violations: bool,
) -> Vec<Box<dyn ReportGenerator>> {
    let mut generators: Vec<Box<dyn ReportGenerator>> = Vec::new();
    if show_violations {
        generators.push(Box::new(ConsoleReport::new()));
    }
    for format in reports.enabled_formats() {
        let sink = Box::new(FileSink::new(reports.destination(format)));
        match format {
            ReportFormat::Text => generators.push(Box::new(TextReport::new(sink))),
            ReportFormat::Html => generators.push(Box::new(HtmlReport::new(sink))),
            ReportFormat::Json => generators.push(Box::new(JsonReport::new(sink))),
            ReportFormat::Console => {}
        }
    }
    generators
}

/// Failed verdicts exit non-zero unless failures are ignored, in which case
/// they are only logged.
#[must_use]
pub fn verdict_exit(verdict: &Verdict, ignore_failures: bool) -> InspectExit {
    match verdict.failure_message() {
        None => InspectExit::Success,
        Some(reason) if ignore_failures => {
            warn!("inspection budget exceeded (ignored): {reason}");
            InspectExit::Success
        }
        Some(_) => InspectExit::ThresholdExceeded,
    }
}

fn print_outcome(outcome: &RunOutcome) {
    for artifact in &outcome.artifacts {
        println!(
            "{} {} report: {}",
            "Wrote".green(),
            artifact.format,
            artifact.destination
        );
    }
    for failure in &outcome.failures {
        println!(
            "{} {} report not written: {}",
            "warning:".yellow().bold(),
            failure.format,
            failure.error
        );
    }

    let v = &outcome.verdict;
    match v.failure_message() {
        None => println!(
            "{}",
            format!(
                "Inspections passed ({} errors, {} warnings).",
                v.error_count, v.warning_count
            )
            .green()
            .bold()
        ),
        Some(reason) => println!(
            "{}",
            format!("Inspections failed: {reason}.").red().bold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::ThresholdConfig;

    fn failed() -> Verdict {
        Verdict {
            passed: false,
            error_count: 1,
            warning_count: 0,
            budget: ThresholdConfig::default(),
        }
    }

    #[test]
    fn failed_verdict_exits_with_threshold_code() {
        assert_eq!(verdict_exit(&failed(), false), InspectExit::ThresholdExceeded);
    }

    #[test]
    fn ignore_failures_downgrades_to_success() {
        assert_eq!(verdict_exit(&failed(), true), InspectExit::Success);
    }

    #[test]
    fn generators_follow_config() {
        let mut reports = ReportsConfig::default();
        reports.html.enabled = false;
        let gens = build_generators(&reports, true);
        let formats: Vec<_> = gens.iter().map(|g| g.format()).collect();
        assert_eq!(
            formats,
            vec![ReportFormat::Console, ReportFormat::Text, ReportFormat::Json]
        );
    }
}
