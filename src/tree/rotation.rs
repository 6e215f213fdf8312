//! Rotation primitives.
//!
//! ```text
//!        p                          p
//!        |     rotate_left(n)       |
//!        n     ------------->       r
//!       / \                        / \
//!      a   r   <-------------     n   c
//!         / \  rotate_right(r)   / \
//!        b   c                  a   b
//! ```
//!
//! Both keep the in-order sequence `a n b r c` intact. Neither touches
//! colors, so a caller outside fix-up must restore the red-black
//! invariants afterwards.

use super::RedBlackTree;
use super::node::{NodeId, Side};
use crate::tracing_helpers::trace_log;

impl<K> RedBlackTree<K> {
    /// Promotes `node`'s right child into `node`'s position.
    pub(crate) fn rotate_left(&mut self, node: NodeId) {
        self.rotate(node, Side::Right);
    }

    /// Promotes `node`'s left child into `node`'s position.
    pub(crate) fn rotate_right(&mut self, node: NodeId) {
        self.rotate(node, Side::Left);
    }

    /// Promotes the child of `node` on `promoted_side`. `node` becomes that
    /// child's child on the opposite side. No-op if the slot is empty.
    fn rotate(&mut self, node: NodeId, promoted_side: Side) {
        let Some(promoted) = self.node_at(node).child(promoted_side) else {
            return;
        };
        trace_log!(%node, %promoted, side = ?promoted_side, "rotate");

        // The inner grandchild changes parents.
        let inner = self.node_at(promoted).child(promoted_side.opposite());
        self.node_at_mut(node).set_child(promoted_side, inner);
        if let Some(inner) = inner {
            self.node_at_mut(inner).parent = Some(node);
        }

        // The promoted node takes over `node`'s slot.
        let parent = self.parent_of(node);
        match parent {
            None => self.root = Some(promoted),
            Some(parent) => {
                let side = self.side_of(parent, node);
                self.node_at_mut(parent).set_child(side, Some(promoted));
            }
        }
        self.node_at_mut(promoted).parent = parent;

        self.node_at_mut(promoted)
            .set_child(promoted_side.opposite(), Some(node));
        self.node_at_mut(node).parent = Some(promoted);
    }
}
