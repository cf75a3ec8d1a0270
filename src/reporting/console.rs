//! Prints violations to the terminal as they arrive.

use colored::Colorize;

use super::{Fragments, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::types::{ProblemRecord, Severity};

#[derive(Debug, Default)]
pub struct ConsoleReport {
    generated: bool,
}

impl ConsoleReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportGenerator for ConsoleReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Console
    }

    fn report(&mut self, problem: &ProblemRecord, level: Severity, _fragments: &Fragments) {
        let header = format!("{level}: {}", problem.message());
        match level {
            Severity::Error => println!("{}", header.red().bold()),
            Severity::Warning => println!("{}", header.yellow()),
            Severity::WeakWarning | Severity::Information => println!("{}", header.dimmed()),
        }
        println!(
            "  {} {} [{}]",
            "-->".blue(),
            problem.location(),
            problem.inspection_id()
        );
    }

    fn generate(&mut self) -> Result<Option<String>> {
        assert!(!self.generated, "console report generated twice");
        self.generated = true;
        Ok(None)
    }
}
