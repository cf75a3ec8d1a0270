use crate::locator::find_display_anchor;
use crate::reporting::highlight::{render_fragment, HighlightTag, HtmlMarkup, PlainMarkup};
use crate::types::{ProblemRecord, Severity};

/// Display fragments of one problem in every markup the generators need.
///
/// Rendered ahead of report dispatch so the owning tree is only read-locked
/// for the walk itself and never while the pipeline holds its own lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub html: Option<String>,
    pub plain: Option<String>,
}

impl Fragments {
    /// Both fragments are `None` for file-level problems.
    #[must_use]
    pub fn render(problem: &ProblemRecord, level: Severity) -> Self {
        let Some(anchor) = problem.anchor() else {
            return Self::default();
        };
        let tag = HighlightTag::for_problem(problem.highlight(), level);
        anchor.read(|tree, node| {
            let display = find_display_anchor(tree, node);
            Self {
                html: Some(render_fragment(tree, display, Some(node), tag, &HtmlMarkup)),
                plain: Some(render_fragment(tree, display, Some(node), tag, &PlainMarkup)),
            }
        })
    }
}

/// Running per-level tallies kept by the file reports for their summaries.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LevelTally {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl LevelTally {
    pub fn add(&mut self, level: Severity) {
        match level {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::WeakWarning | Severity::Information => self.infos += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }

    /// `2 errors, 1 warning`; empty buckets are left out.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.errors > 0 {
            parts.push(format!("{} {}", self.errors, pluralize("error", self.errors)));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} {}",
                self.warnings,
                pluralize("warning", self.warnings)
            ));
        }
        if self.infos > 0 {
            parts.push(format!("{} {}", self.infos, pluralize("info", self.infos)));
        }
        parts.join(", ")
    }
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn indent(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
    out
}
