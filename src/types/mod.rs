use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::syntax::NodeRef;

mod verdict;
pub use verdict::Verdict;

/// Severity level of a problem.
///
/// Only `Error` and `Warning` count against the build budgets; the two lower
/// levels only shape report content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    WeakWarning,
    Information,
}

impl Severity {
    /// Prefix word for report lines.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::WeakWarning => "weak warning",
            Self::Information => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// How the engine wants the offending span highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    #[default]
    Generic,
    /// Unused symbol; rendered with its own style regardless of severity.
    Unused,
}

/// One finding reported by the analysis engine.
///
/// Built once through the `with_*` methods and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProblemRecord {
    inspection_id: String,
    severity: Option<Severity>,
    file: PathBuf,
    line: Option<usize>,
    anchor: Option<NodeRef>,
    message: String,
    highlight: HighlightKind,
}

impl ProblemRecord {
    #[must_use]
    pub fn new(
        inspection_id: impl Into<String>,
        file: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            inspection_id: inspection_id.into(),
            severity: None,
            file: file.into(),
            line: None,
            anchor: None,
            message: message.into(),
            highlight: HighlightKind::Generic,
        }
    }

    /// Severity the engine itself reported. The effective level used for
    /// accounting comes from the classifier.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// 1-based line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: NodeRef) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: HighlightKind) -> Self {
        self.highlight = highlight;
        self
    }

    #[must_use]
    pub fn inspection_id(&self) -> &str {
        &self.inspection_id
    }

    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&NodeRef> {
        self.anchor.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn highlight(&self) -> HighlightKind {
        self.highlight
    }

    /// `path:line`, or just the path for problems without a line.
    #[must_use]
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{line}", self.file.display()),
            None => self.file.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_includes_line_when_known() {
        let p = ProblemRecord::new("X", "src/lib.rs", "msg").with_line(12);
        assert_eq!(p.location(), "src/lib.rs:12");
    }

    #[test]
    fn location_is_path_for_file_level_problems() {
        let p = ProblemRecord::new("X", "src/lib.rs", "msg");
        assert_eq!(p.location(), "src/lib.rs");
        assert!(p.anchor().is_none());
    }

    #[test]
    fn severity_uses_snake_case_names() {
        let json = serde_json::to_string(&Severity::WeakWarning).unwrap();
        assert_eq!(json, "\"weak_warning\"");
        let back: HighlightKind = serde_json::from_str("\"unused\"").unwrap();
        assert_eq!(back, HighlightKind::Unused);
    }
}
