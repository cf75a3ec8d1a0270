use serde::{Deserialize, Serialize};

use super::shared::LevelTally;
use super::{Fragments, ReportFormat, ReportGenerator, ReportSink};
use crate::error::Result;
use crate::types::{HighlightKind, ProblemRecord, Severity};

/// Machine-readable form of one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonProblem {
    pub inspection_id: String,
    /// Classified level used for the verdict.
    pub level: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_severity: Option<Severity>,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
    #[serde(default)]
    pub highlight: HighlightKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

/// Whole structured artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDocument {
    pub problems: Vec<JsonProblem>,
    pub counts: JsonCounts,
}

pub struct JsonReport {
    sink: Box<dyn ReportSink>,
    doc: JsonDocument,
    tally: LevelTally,
    generated: bool,
}

impl JsonReport {
    #[must_use]
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self {
            sink,
            doc: JsonDocument::default(),
            tally: LevelTally::default(),
            generated: false,
        }
    }
}

impl ReportGenerator for JsonReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn report(&mut self, problem: &ProblemRecord, level: Severity, fragments: &Fragments) {
        self.tally.add(level);
        self.doc.problems.push(JsonProblem {
            inspection_id: problem.inspection_id().to_string(),
            level,
            reported_severity: problem.severity(),
            file: problem.file().display().to_string(),
            line: problem.line(),
            message: problem.message().to_string(),
            highlight: problem.highlight(),
            fragment: fragments.plain.clone(),
        });
    }

    fn generate(&mut self) -> Result<Option<String>> {
        assert!(!self.generated, "json report generated twice");
        self.generated = true;

        self.doc.counts = JsonCounts {
            errors: self.tally.errors,
            warnings: self.tally.warnings,
            infos: self.tally.infos,
        };
        let mut bytes = serde_json::to_vec_pretty(&self.doc)?;
        bytes.push(b'\n');
        self.sink.write_artifact(&bytes)?;
        Ok(Some(self.sink.describe()))
    }
}
