//! Self-contained HTML report with highlighted fragments.

use std::fmt::Write;

use super::highlight::escape_html;
use super::{Fragments, ReportFormat, ReportGenerator, ReportSink};
use crate::error::Result;
use crate::types::{ProblemRecord, Severity};

pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>Inspection report</title><style>
error {
    background-color: red;
}
warning {
    background-color: yellow;
}
info {
    text-decoration-style: wavy;
    text-decoration: underline;
}
unused {
    background-color: lightgray;
}
keyword {
    font-weight: bold;
}
</style></head>
<body>
"#;

pub const HTML_FOOTER: &str = "</body></html>\n";

pub struct HtmlReport {
    sink: Box<dyn ReportSink>,
    out: String,
    generated: bool,
}

impl HtmlReport {
    /// The header is written immediately; the footer on `generate`.
    #[must_use]
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self {
            sink,
            out: HTML_HEADER.to_string(),
            generated: false,
        }
    }
}

impl ReportGenerator for HtmlReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn report(&mut self, problem: &ProblemRecord, _level: Severity, fragments: &Fragments) {
        let _ = writeln!(
            self.out,
            "<p>\n    In file <b>{}</b>:\n</p>",
            escape_html(&problem.location())
        );
        if let Some(fragment) = &fragments.html {
            let _ = writeln!(self.out, "<pre>\n{fragment}\n</pre>");
        }
        let _ = writeln!(
            self.out,
            "<p>\n    <i>{}</i>\n</p>",
            escape_html(problem.message())
        );
    }

    fn generate(&mut self) -> Result<Option<String>> {
        assert!(!self.generated, "html report generated twice");
        self.generated = true;

        self.out.push_str(HTML_FOOTER);
        self.sink.write_artifact(self.out.as_bytes())?;
        Ok(Some(self.sink.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::MemorySink;
    use crate::syntax::{share, MemTree, NodeRef, SourceTree};
    use crate::types::HighlightKind;

    fn generate(problems: &[(ProblemRecord, Severity)]) -> String {
        let sink = MemorySink::new();
        let mut report = HtmlReport::new(Box::new(sink.clone()));
        for (p, level) in problems {
            report.report(p, *level, &Fragments::render(p, *level));
        }
        report.generate().unwrap();
        sink.contents()
    }

    #[test]
    fn empty_report_is_header_and_footer() {
        assert_eq!(generate(&[]), format!("{HTML_HEADER}{HTML_FOOTER}"));
    }

    #[test]
    fn file_level_problem_has_no_pre_block() {
        let p = ProblemRecord::new("Id", "build.rs", "a < b");
        let html = generate(&[(p, Severity::Error)]);
        assert!(html.contains("In file <b>build.rs</b>:"));
        assert!(html.contains("<i>a &lt; b</i>"));
        assert!(!html.contains("<pre>"));
        assert!(!html.contains("<error>"));
    }

    #[test]
    fn unused_symbol_gets_unused_tag() {
        let mut t = MemTree::new(1);
        let root = t.root();
        let item = t.add_node(root, 1);
        t.add_keyword(item, 1, "use");
        t.add_leaf(item, 1, " ");
        let path = t.add_leaf(item, 1, "std::fmt");
        t.add_leaf(item, 1, ";");
        let anchor = NodeRef::new(share(t), path);

        let p = ProblemRecord::new("UnusedImport", "lib.rs", "unused import")
            .with_line(1)
            .with_anchor(anchor)
            .with_highlight(HighlightKind::Unused);
        let html = generate(&[(p, Severity::Error)]);
        assert!(html.contains(
            "<pre>\n<keyword>use</keyword> <unused>std::fmt</unused>;\n</pre>"
        ));
    }
}
