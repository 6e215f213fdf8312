//! Family relations between nodes.
//!
//! The side a child occupies is read from its parent's `left` link, never
//! recomputed from key order.

use super::RedBlackTree;
use super::node::{NodeId, Side};

impl<K> RedBlackTree<K> {
    #[inline]
    pub(crate) fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.node_at(node).parent
    }

    /// `parent(parent(node))`.
    pub(crate) fn grandparent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_of(node)
            .and_then(|parent| self.parent_of(parent))
    }

    /// Returns `true` if `child` occupies the left slot of `parent`.
    #[inline]
    pub(crate) fn is_left_child(&self, parent: NodeId, child: NodeId) -> bool {
        self.node_at(parent).left == Some(child)
    }

    /// The slot `child` occupies under `parent`.
    #[inline]
    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.is_left_child(parent, child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// The other child of `node`'s parent. `None` at the root or when
    /// the other slot is empty.
    pub(crate) fn sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(node)?;
        let side = self.side_of(parent, node);
        self.node_at(parent).child(side.opposite())
    }

    /// `sibling(parent(node))`.
    pub(crate) fn aunt(&self, node: NodeId) -> Option<NodeId> {
        self.sibling(self.parent_of(node)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tree_of(keys: &[&str]) -> RedBlackTree {
        keys.iter().map(|key| (*key).to_string()).collect()
    }

    fn id_of(tree: &RedBlackTree, key: &str) -> NodeId {
        tree.lookup(key).unwrap().id()
    }

    #[rstest]
    fn test_root_has_no_relatives() {
        let tree = tree_of(&["m", "f", "t"]);
        let root = id_of(&tree, "m");
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.grandparent(root), None);
        assert_eq!(tree.sibling(root), None);
        assert_eq!(tree.aunt(root), None);
    }

    #[rstest]
    fn test_siblings_point_at_each_other() {
        let tree = tree_of(&["m", "f", "t"]);
        let (root, left, right) = (id_of(&tree, "m"), id_of(&tree, "f"), id_of(&tree, "t"));

        assert!(tree.is_left_child(root, left));
        assert!(!tree.is_left_child(root, right));
        assert_eq!(tree.side_of(root, right), Side::Right);
        assert_eq!(tree.sibling(left), Some(right));
        assert_eq!(tree.sibling(right), Some(left));
    }

    #[rstest]
    fn test_sibling_of_only_child_is_none() {
        let tree = tree_of(&["m", "f"]);
        assert_eq!(tree.sibling(id_of(&tree, "f")), None);
    }

    #[rstest]
    fn test_grandparent_and_aunt() {
        let tree = tree_of(&["m", "f", "t", "a"]);
        let leaf = id_of(&tree, "a");
        assert_eq!(tree.grandparent(leaf), Some(id_of(&tree, "m")));
        assert_eq!(tree.aunt(leaf), Some(id_of(&tree, "t")));
    }
}
