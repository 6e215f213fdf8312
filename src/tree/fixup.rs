//! The insertion fix-up state machine.
//!
//! After a red leaf is placed, [`RedBlackTree::fix_up`] walks upward from
//! it with a cursor. Each step classifies the cursor's surroundings into a
//! [`FixUpCase`] and applies it:
//!
//! | Case       | Shape at the cursor                         | Action                                      | Next            |
//! |------------|---------------------------------------------|---------------------------------------------|-----------------|
//! | `Root`     | cursor is the root                          | blacken it                                  | stop            |
//! | `Balanced` | cursor or its parent is black               | nothing                                     | stop            |
//! | `RedAunt`  | red parent, red aunt                        | parent and aunt black, grandparent red      | grandparent     |
//! | `ZigZag`   | red parent, black aunt, bent line           | rotate the parent to straighten the line    | old parent      |
//! | `Straight` | red parent, black aunt, straight line       | parent black, grandparent red, rotate it    | stop            |
//!
//! The bent-line test runs before the straight-line test; with a red
//! parent and a black or absent aunt exactly one of them matches.

use super::RedBlackTree;
use super::color::Color;
use super::node::{NodeId, Side};
use crate::tracing_helpers::trace_log;

/// One state of the fix-up loop, with the nodes its action needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum FixUpCase {
    /// The given node is the root and must be black.
    Root(NodeId),
    /// No red-red conflict at the cursor.
    Balanced,
    /// Red parent and red aunt: push the blackness down from the
    /// grandparent.
    RedAunt {
        parent: NodeId,
        aunt: NodeId,
        grandparent: NodeId,
    },
    /// The cursor hangs on the opposite side of its parent from the side
    /// `parent_side` the parent hangs on under the grandparent.
    ZigZag { parent: NodeId, parent_side: Side },
    /// The cursor and its parent both hang on `side`.
    Straight {
        parent: NodeId,
        grandparent: NodeId,
        side: Side,
    },
}

impl<K> RedBlackTree<K> {
    /// Restores the red-black invariants after `node` was placed as a red
    /// leaf (or recolored red by a previous step).
    pub(crate) fn fix_up(&mut self, node: NodeId) {
        let mut cursor = node;
        while let Some(next) = self.fix_up_step(cursor) {
            cursor = next;
        }
    }

    /// Applies the case found at `cursor`. Returns the next cursor, or
    /// `None` once the tree is balanced.
    pub(crate) fn fix_up_step(&mut self, cursor: NodeId) -> Option<NodeId> {
        let case = self.classify(cursor);
        trace_log!(%cursor, ?case, "fix-up step");

        match case {
            FixUpCase::Root(root) => {
                self.set_color(root, Color::Black);
                None
            }
            FixUpCase::Balanced => None,
            FixUpCase::RedAunt {
                parent,
                aunt,
                grandparent,
            } => {
                self.set_color(parent, Color::Black);
                self.set_color(aunt, Color::Black);
                self.set_color(grandparent, Color::Red);
                Some(grandparent)
            }
            FixUpCase::ZigZag {
                parent,
                parent_side,
            } => {
                match parent_side {
                    Side::Left => self.rotate_left(parent),
                    Side::Right => self.rotate_right(parent),
                }
                Some(parent)
            }
            FixUpCase::Straight {
                parent,
                grandparent,
                side,
            } => {
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                match side {
                    Side::Left => self.rotate_right(grandparent),
                    Side::Right => self.rotate_left(grandparent),
                }
                None
            }
        }
    }

    /// Reads the local shape around `cursor`.
    pub(crate) fn classify(&self, cursor: NodeId) -> FixUpCase {
        let Some(parent) = self.parent_of(cursor) else {
            return FixUpCase::Root(cursor);
        };
        if self.node_at(cursor).color.is_black() || self.node_at(parent).color.is_black() {
            return FixUpCase::Balanced;
        }

        // A red root means an earlier step skipped its repair.
        debug_assert!(
            self.parent_of(parent).is_some(),
            "fix-up reached red root {parent}"
        );
        let Some(grandparent) = self.parent_of(parent) else {
            return FixUpCase::Root(parent);
        };

        let parent_side = self.side_of(grandparent, parent);
        let aunt = self.node_at(grandparent).child(parent_side.opposite());
        if let Some(aunt) = aunt.filter(|&aunt| self.node_at(aunt).color.is_red()) {
            return FixUpCase::RedAunt {
                parent,
                aunt,
                grandparent,
            };
        }

        if self.side_of(parent, cursor) == parent_side {
            FixUpCase::Straight {
                parent,
                grandparent,
                side: parent_side,
            }
        } else {
            FixUpCase::ZigZag {
                parent,
                parent_side,
            }
        }
    }
}
