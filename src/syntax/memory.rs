use std::borrow::Cow;

use super::{NodeId, SourceTree};

#[derive(Debug, Clone)]
struct MemNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    line: usize,
    keyword: bool,
}

/// Hand-built syntax tree.
///
/// Used by engines that do not go through tree-sitter and by tests that
/// need an exact tree shape. Inner nodes carry no text of their own; their
/// text is the concatenation of their leaves.
#[derive(Debug, Clone)]
pub struct MemTree {
    nodes: Vec<MemNode>,
    document: bool,
}

impl MemTree {
    /// Creates a tree holding only the file root, starting at `root_line`.
    #[must_use]
    pub fn new(root_line: usize) -> Self {
        Self {
            nodes: vec![MemNode {
                parent: None,
                children: Vec::new(),
                text: String::new(),
                line: root_line,
                keyword: false,
            }],
            document: true,
        }
    }

    /// Drops line information, as for a file with no backing document.
    #[must_use]
    pub fn without_document(mut self) -> Self {
        self.document = false;
        self
    }

    /// Adds an inner node.
    pub fn add_node(&mut self, parent: NodeId, line: usize) -> NodeId {
        self.push(parent, line, String::new(), false)
    }

    pub fn add_leaf(&mut self, parent: NodeId, line: usize, text: &str) -> NodeId {
        self.push(parent, line, text.to_string(), false)
    }

    pub fn add_keyword(&mut self, parent: NodeId, line: usize, text: &str) -> NodeId {
        self.push(parent, line, text.to_string(), true)
    }

    fn push(&mut self, parent: NodeId, line: usize, text: String, keyword: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MemNode {
            parent: Some(parent),
            children: Vec::new(),
            text,
            line,
            keyword,
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        if n.children.is_empty() {
            out.push_str(&n.text);
            return;
        }
        for child in &n.children {
            self.collect_text(*child, out);
        }
    }
}

impl SourceTree for MemTree {
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
        match self.nodes.get(node.0) {
            Some(n) if n.children.is_empty() => Cow::Borrowed(n.text.as_str()),
            Some(_) => {
                let mut out = String::new();
                self.collect_text(node, &mut out);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(""),
        }
    }

    fn is_keyword(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.keyword)
    }

    fn line(&self, node: NodeId) -> Option<usize> {
        if !self.document {
            return None;
        }
        self.nodes.get(node.0).map(|n| n.line)
    }
}
