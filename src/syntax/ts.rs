//! Syntax trees backed by tree-sitter.
//!
//! The tree-sitter tree is flattened into an owned arena right after
//! parsing. Whitespace and other gaps between tokens become trivia leaves so
//! that concatenating the leaves of any node gives back its exact source.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tree_sitter::{Node, Parser};

use super::{NodeId, SourceTree};
use crate::error::{InspectError, Result};
use crate::lang::Lang;

#[derive(Debug, Clone)]
struct TsNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    start: usize,
    end: usize,
    keyword: bool,
    trivia: bool,
}

#[derive(Debug, Clone)]
pub struct TsTree {
    lang: Lang,
    source: String,
    nodes: Vec<TsNode>,
    line_starts: Vec<usize>,
    syntax_errors: bool,
}

impl TsTree {
    /// Reads and parses a source file. Returns `Ok(None)` for languages
    /// without a grammar.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the parser fails.
    pub fn from_path(path: &Path) -> Result<Option<Self>> {
        let Some(lang) = Lang::from_path(path) else {
            return Ok(None);
        };
        let source = fs::read_to_string(path).map_err(|e| InspectError::io(e, path))?;
        Self::parse(path, lang, source).map(Some)
    }

    /// # Errors
    /// Returns error if the grammar cannot be loaded or parsing is aborted.
    pub fn parse(path: &Path, lang: Lang, source: String) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(lang.grammar())
            .map_err(|e| InspectError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let Some(tree) = parser.parse(&source, None) else {
            return Err(InspectError::Parse {
                path: path.to_path_buf(),
                reason: "parser returned no tree".into(),
            });
        };

        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        let mut out = Self {
            lang,
            source: String::new(),
            nodes: Vec::new(),
            line_starts,
            syntax_errors: tree.root_node().has_error(),
        };
        out.flatten(tree.root_node(), None);
        out.source = source;
        Ok(out)
    }

    /// Whether the grammar had to recover from errors. Fragments from such
    /// trees may be oddly shaped.
    #[must_use]
    pub fn has_syntax_errors(&self) -> bool {
        self.syntax_errors
    }

    /// Deepest node containing the 1-based `(line, column)` position.
    ///
    /// Without a column the first non-blank character of the line is used.
    /// A column past the end of the line is clamped to its last character.
    /// Returns `None` for blank or out-of-range lines and for positions only
    /// the file root contains.
    #[must_use]
    pub fn locate(&self, line: usize, column: Option<usize>) -> Option<NodeId> {
        let line_start = *self.line_starts.get(line.checked_sub(1)?)?;
        let line_end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.source.len());

        let text = self.source.get(line_start..line_end)?;
        let offset = match column {
            Some(col) => {
                let content = text.trim_end_matches(['\n', '\r']).len();
                let last = line_start + content.checked_sub(1)?;
                (line_start + col.saturating_sub(1)).min(last)
            }
            None => line_start + text.find(|c: char| !c.is_whitespace())?,
        };

        let mut current = self.root();
        while let Some(next) = self.child_containing(current, offset) {
            current = next;
        }
        (current != self.root()).then_some(current)
    }

    fn child_containing(&self, node: NodeId, offset: usize) -> Option<NodeId> {
        self.children(node).iter().copied().find(|c| {
            self.nodes
                .get(c.0)
                .is_some_and(|n| !n.trivia && n.start <= offset && offset < n.end)
        })
    }

    fn flatten(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let leaf = node.child_count() == 0;
        let keyword = leaf && self.lang.is_keyword(node.kind(), node.is_named());
        let id = self.push(TsNode {
            parent,
            children: Vec::new(),
            start: node.start_byte(),
            end: node.end_byte(),
            keyword,
            trivia: false,
        });

        let mut cursor = node.start_byte();
        for i in 0..node.child_count() {
            let Some(child) = node.child(i) else {
                continue;
            };
            if child.start_byte() > cursor {
                self.push_trivia(id, cursor, child.start_byte());
            }
            self.flatten(child, Some(id));
            cursor = cursor.max(child.end_byte());
        }
        if !leaf && node.end_byte() > cursor {
            self.push_trivia(id, cursor, node.end_byte());
        }
        id
    }

    fn push_trivia(&mut self, parent: NodeId, start: usize, end: usize) {
        self.push(TsNode {
            parent: Some(parent),
            children: Vec::new(),
            start,
            end,
            keyword: false,
            trivia: true,
        });
    }

    fn push(&mut self, node: TsNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(p) = node.parent.and_then(|p| self.nodes.get_mut(p.0)) {
            p.children.push(id);
        }
        self.nodes.push(node);
        id
    }
}

impl SourceTree for TsTree {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn text(&self, node: NodeId) -> Cow<'_, str> {
        let text = self
            .nodes
            .get(node.0)
            .and_then(|n| self.source.get(n.start..n.end))
            .unwrap_or("");
        Cow::Borrowed(text)
    }

    fn is_keyword(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.keyword)
    }

    fn line(&self, node: NodeId) -> Option<usize> {
        let start = self.nodes.get(node.0)?.start;
        Some(self.line_starts.partition_point(|&s| s <= start))
    }
}
