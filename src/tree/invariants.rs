//! Structural self-check.

use super::RedBlackTree;
use super::node::NodeId;
use crate::error::InvariantViolation;

impl<K: Ord> RedBlackTree<K> {
    /// Checks every red-black and structural invariant.
    ///
    /// On success returns the black-height of the tree: the number of
    /// black nodes on any path from the root down to a missing child,
    /// root included. An empty tree has black-height 0.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, searching the tree
    /// depth-first from the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = (0..100).collect();
    /// let black_height = tree.validate().unwrap();
    /// assert!(black_height >= 1);
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        let root_node = self.node_at(root);
        if root_node.parent.is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if root_node.color.is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        self.check_subtree(root, None, None)
    }

    /// Validates the subtree at `id`, whose keys must lie strictly between
    /// `lower` and `upper`. Returns its black-height.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<usize, InvariantViolation> {
        let node = self.node_at(id);
        if lower.is_some_and(|lower| node.key <= *lower)
            || upper.is_some_and(|upper| node.key >= *upper)
        {
            return Err(InvariantViolation::OrderViolation { node: id });
        }

        let mut heights = [0; 2];
        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child_id) = child else {
                continue;
            };
            let child_node = self.node_at(child_id);
            if child_node.parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { node: child_id });
            }
            if node.color.is_red() && child_node.color.is_red() {
                return Err(InvariantViolation::RedRed { node: child_id });
            }
            let (child_lower, child_upper) = if slot == 0 {
                (lower, Some(&node.key))
            } else {
                (Some(&node.key), upper)
            };
            heights[slot] = self.check_subtree(child_id, child_lower, child_upper)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                node: id,
                left,
                right,
            });
        }
        Ok(left + usize::from(node.color.is_black()))
    }
}
