//! Fragment rendering with keyword and problem markers.

use crate::syntax::{NodeId, SourceTree};
use crate::types::{HighlightKind, Severity};

pub const KEYWORD_TAG: &str = "keyword";

/// Marker wrapped around the problem span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTag {
    Error,
    Warning,
    Info,
    Unused,
}

impl HighlightTag {
    /// `Unused` wins over the severity mapping.
    #[must_use]
    pub fn for_problem(kind: HighlightKind, level: Severity) -> Self {
        match kind {
            HighlightKind::Unused => Self::Unused,
            HighlightKind::Generic => match level {
                Severity::Error => Self::Error,
                Severity::Warning => Self::Warning,
                Severity::WeakWarning | Severity::Information => Self::Info,
            },
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Unused => "unused",
        }
    }
}

/// How markers and literal text are written out.
pub trait Markup {
    fn open(&self, out: &mut String, tag: &str);
    fn close(&self, out: &mut String, tag: &str);
    fn text(&self, out: &mut String, text: &str);
}

/// `<tag>...</tag>` markers with escaped text.
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn open(&self, out: &mut String, tag: &str) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
    }

    fn close(&self, out: &mut String, tag: &str) {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    fn text(&self, out: &mut String, text: &str) {
        out.push_str(&escape_html(text));
    }
}

/// No markers, raw text.
pub struct PlainMarkup;

impl Markup for PlainMarkup {
    fn open(&self, _out: &mut String, _tag: &str) {}

    fn close(&self, _out: &mut String, _tag: &str) {}

    fn text(&self, out: &mut String, text: &str) {
        out.push_str(text);
    }
}

#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Flattens `display` to text, wrapping keyword leaves and the whole
/// `problem` subtree in markers.
///
/// The problem marker opens before and closes after everything emitted for
/// the problem node, so a keyword marker inside it is always fully nested.
/// With no problem node the fragment is plain literal text.
#[must_use]
pub fn render_fragment(
    tree: &dyn SourceTree,
    display: NodeId,
    problem: Option<NodeId>,
    tag: HighlightTag,
    markup: &dyn Markup,
) -> String {
    let mut out = String::new();
    match problem {
        Some(problem) => {
            let ctx = Visit {
                tree,
                problem,
                tag,
                markup,
            };
            ctx.visit(display, &mut out);
        }
        None => markup.text(&mut out, &tree.text(display)),
    }
    out
}

struct Visit<'a> {
    tree: &'a dyn SourceTree,
    problem: NodeId,
    tag: HighlightTag,
    markup: &'a dyn Markup,
}

impl Visit<'_> {
    fn visit(&self, node: NodeId, out: &mut String) {
        let is_problem = node == self.problem;
        if is_problem {
            self.markup.open(out, self.tag.name());
        }

        let children = self.tree.children(node);
        if children.is_empty() {
            self.emit_leaf(node, out);
        }
        for child in children {
            self.visit(*child, out);
        }

        if is_problem {
            self.markup.close(out, self.tag.name());
        }
    }

    fn emit_leaf(&self, node: NodeId, out: &mut String) {
        let keyword = self.tree.is_keyword(node);
        if keyword {
            self.markup.open(out, KEYWORD_TAG);
        }
        self.markup.text(out, &self.tree.text(node));
        if keyword {
            self.markup.close(out, KEYWORD_TAG);
        }
    }
}
