//! Picks the fragment of source to show for a problem.

use crate::syntax::{NodeId, SourceTree};

/// Smallest ancestor of `anchor` worth displaying.
///
/// Climbs from the anchor while the current node starts on the same line as
/// the problem (or later), so a problem on a single token is shown together
/// with its enclosing statement or declaration. The walk never reaches the
/// file root. Without line information the anchor itself is returned.
#[must_use]
pub fn find_display_anchor(tree: &dyn SourceTree, anchor: NodeId) -> NodeId {
    let mut current = anchor;
    while let Some(parent) = tree.parent(current) {
        if tree.is_file_root(parent) || covers(tree, current, anchor) {
            break;
        }
        current = parent;
    }
    current
}

/// A node covers the problem once it starts on an earlier line.
fn covers(tree: &dyn SourceTree, node: NodeId, problem: NodeId) -> bool {
    match (tree.line(node), tree.line(problem)) {
        (Some(line), Some(problem_line)) => line < problem_line,
        _ => true,
    }
}
