//! Report generators.
//!
//! Every output format implements [`ReportGenerator`]. The pipeline feeds each
//! generator the same problems in the same order, then calls `generate` once
//! to flush the artifact to its sink.

pub mod console;
pub mod highlight;
pub mod html;
pub mod json;
pub mod shared;
pub mod sink;
pub mod text;

use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::types::{ProblemRecord, Severity};

pub use console::ConsoleReport;
pub use shared::Fragments;
pub use html::HtmlReport;
pub use json::JsonReport;
pub use sink::{FileSink, MemorySink, ReportSink};
pub use text::TextReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Html,
    Json,
    Console,
}

impl ReportFormat {
    /// File extension used for default destinations.
    #[must_use]
    pub fn ext(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
            Self::Json => "json",
            Self::Console => "log",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
            Self::Console => "console",
        };
        f.write_str(name)
    }
}

pub trait ReportGenerator: Send {
    fn format(&self) -> ReportFormat;

    /// Adds one problem. `level` is the classified severity and `fragments`
    /// its pre-rendered source context.
    fn report(&mut self, problem: &ProblemRecord, level: Severity, fragments: &Fragments);

    /// Finalizes the artifact and writes it to the sink. Returns where it was
    /// written, or `None` for generators without an artifact.
    ///
    /// # Panics
    /// Panics when called a second time.
    ///
    /// # Errors
    /// Returns error if the sink write fails.
    fn generate(&mut self) -> Result<Option<String>>;
}
