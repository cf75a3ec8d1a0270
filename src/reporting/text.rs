use std::fmt::Write;

use super::shared::{indent, LevelTally};
use super::{Fragments, ReportFormat, ReportGenerator, ReportSink};
use crate::error::Result;
use crate::types::{ProblemRecord, Severity};

/// Plain-text report, no markup.
pub struct TextReport {
    sink: Box<dyn ReportSink>,
    out: String,
    tally: LevelTally,
    generated: bool,
}

impl TextReport {
    #[must_use]
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self {
            sink,
            out: String::new(),
            tally: LevelTally::default(),
            generated: false,
        }
    }
}

impl ReportGenerator for TextReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }

    fn report(&mut self, problem: &ProblemRecord, level: Severity, fragments: &Fragments) {
        self.tally.add(level);
        let location = problem.location();
        let id = problem.inspection_id();

        // Writing into a String cannot fail.
        let _ = match &fragments.plain {
            Some(fragment) => writeln!(
                self.out,
                "{location}: {level} [{id}]\n{}    = {}\n",
                indent(fragment, "    "),
                problem.message()
            ),
            None => writeln!(
                self.out,
                "{location}: {level} [{id}] {}\n",
                problem.message()
            ),
        };
    }

    fn generate(&mut self) -> Result<Option<String>> {
        assert!(!self.generated, "text report generated twice");
        self.generated = true;

        if self.tally.total() == 0 {
            self.out.push_str("No problems found.\n");
        } else {
            let _ = writeln!(self.out, "Found {}.", self.tally.summary());
        }
        self.sink.write_artifact(self.out.as_bytes())?;
        Ok(Some(self.sink.describe()))
    }
}
