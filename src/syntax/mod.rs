//! Read-only view of the analysis engine's syntax trees.
//!
//! The engine owns its trees; this crate only navigates them through the
//! [`SourceTree`] capability. Trees are shared behind a read/write lock
//! because the engine may update them while reports are being rendered, so
//! every walk happens inside [`read_scope`].

use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub mod memory;
pub mod ts;

pub use memory::MemTree;
pub use ts::TsTree;

/// Handle to a node inside one tree. Only meaningful for the tree that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Navigation capability over a syntax tree.
pub trait SourceTree: Send + Sync {
    fn root(&self) -> NodeId;

    /// `None` at the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children in source order. Empty for leaves.
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Source text covered by the node.
    fn text(&self, node: NodeId) -> Cow<'_, str>;

    /// Whether a leaf is a language keyword token.
    fn is_keyword(&self, node: NodeId) -> bool;

    /// 1-based start line, `None` when no document is attached to the tree.
    fn line(&self, node: NodeId) -> Option<usize>;

    fn is_file_root(&self, node: NodeId) -> bool {
        node == self.root()
    }
}

pub type SharedTree = Arc<RwLock<dyn SourceTree>>;

/// Wraps a tree for sharing between the engine and report generators.
pub fn share<T: SourceTree + 'static>(tree: T) -> SharedTree {
    Arc::new(RwLock::new(tree))
}

/// Runs `f` with the tree read-locked. The lock is released when `f`
/// returns or unwinds.
pub fn read_scope<R>(tree: &SharedTree, f: impl FnOnce(&dyn SourceTree) -> R) -> R {
    let guard = tree.read();
    f(&*guard)
}

/// A node together with the tree it belongs to.
#[derive(Clone)]
pub struct NodeRef {
    tree: SharedTree,
    node: NodeId,
}

impl NodeRef {
    #[must_use]
    pub fn new(tree: SharedTree, node: NodeId) -> Self {
        Self { tree, node }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn tree(&self) -> &SharedTree {
        &self.tree
    }

    /// Read-locked access to the owning tree.
    pub fn read<R>(&self, f: impl FnOnce(&dyn SourceTree, NodeId) -> R) -> R {
        read_scope(&self.tree, |tree| f(tree, self.node))
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("node", &self.node).finish_non_exhaustive()
    }
}
