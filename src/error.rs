//! Error types for the tree and the dictionary.
//!
//! Lookups that miss are not errors: [`RedBlackTree::lookup`] returns
//! `None`. The types here cover rejected keys, failed structural checks
//! and dictionary input problems.
//!
//! [`RedBlackTree::lookup`]: crate::tree::RedBlackTree::lookup

use crate::tree::NodeId;

/// Why a key was refused by [`RedBlackTree::insert`].
///
/// [`RedBlackTree::insert`]: crate::tree::RedBlackTree::insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidKeyReason {
    /// The key is empty and the tree is configured with
    /// [`EmptyKeyPolicy::Reject`](crate::config::EmptyKeyPolicy::Reject).
    Empty,
}

/// Represents a key that the tree's configuration does not accept.
///
/// # Examples
///
/// ```rust
/// use rbdict::{InvalidKeyError, InvalidKeyReason, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// let error = tree.insert(String::new()).unwrap_err();
/// assert_eq!(error.reason, InvalidKeyReason::Empty);
/// assert_eq!(format!("{error}"), "invalid key: empty keys are rejected");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidKeyError {
    /// What made the key invalid.
    pub reason: InvalidKeyReason,
}

impl InvalidKeyError {
    pub(crate) const fn empty() -> Self {
        Self {
            reason: InvalidKeyReason::Empty,
        }
    }
}

impl std::fmt::Display for InvalidKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            InvalidKeyReason::Empty => write!(formatter, "invalid key: empty keys are rejected"),
        }
    }
}

impl std::error::Error for InvalidKeyError {}

/// A broken red-black or structural invariant, reported by
/// [`RedBlackTree::validate`].
///
/// These never surface from a correct tree. They exist so tests and
/// debug builds can pinpoint the node where a rebalancing step went wrong.
///
/// [`RedBlackTree::validate`]: crate::tree::RedBlackTree::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// The root node has a parent link.
    RootHasParent,
    /// A red node has a red child.
    RedRed {
        /// The red child of a red parent.
        node: NodeId,
    },
    /// The two subtrees of a node have different black-heights.
    BlackHeightMismatch {
        /// The node whose subtrees disagree.
        node: NodeId,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// A key sits on the wrong side of an ancestor.
    OrderViolation {
        /// The misplaced node.
        node: NodeId,
    },
    /// A child's parent link does not point back at its parent.
    BrokenParentLink {
        /// The child whose back-reference is wrong.
        node: NodeId,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root node is red"),
            Self::RootHasParent => write!(formatter, "root node has a parent link"),
            Self::RedRed { node } => write!(formatter, "red node {node} has a red parent"),
            Self::BlackHeightMismatch { node, left, right } => write!(
                formatter,
                "black-height mismatch at node {node}: left {left}, right {right}"
            ),
            Self::OrderViolation { node } => {
                write!(formatter, "node {node} breaks search-tree ordering")
            }
            Self::BrokenParentLink { node } => {
                write!(formatter, "node {node} does not link back to its parent")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Errors raised while loading a [`Dictionary`] or checking text against it.
///
/// [`Dictionary`]: crate::dictionary::Dictionary
#[derive(Debug)]
pub enum DictionaryError {
    /// Reading the input failed.
    Io(std::io::Error),
    /// A dictionary line was refused by the tree.
    InvalidKey {
        /// One-based line number in the dictionary input.
        line: usize,
        /// The underlying rejection.
        source: InvalidKeyError,
    },
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "failed to read input: {error}"),
            Self::InvalidKey { line, source } => write!(formatter, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::InvalidKey { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for DictionaryError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_key_error_display() {
        let error = InvalidKeyError::empty();
        assert_eq!(format!("{error}"), "invalid key: empty keys are rejected");
    }

    #[test]
    fn test_invariant_violation_display() {
        assert_eq!(format!("{}", InvariantViolation::RedRoot), "root node is red");
        assert_eq!(
            format!(
                "{}",
                InvariantViolation::BlackHeightMismatch {
                    node: NodeId::new(3),
                    left: 2,
                    right: 1,
                }
            ),
            "black-height mismatch at node #3: left 2, right 1"
        );
        assert_eq!(
            format!("{}", InvariantViolation::RedRed { node: NodeId::new(7) }),
            "red node #7 has a red parent"
        );
    }

    #[test]
    fn test_dictionary_error_display_and_source() {
        let error = DictionaryError::InvalidKey {
            line: 4,
            source: InvalidKeyError::empty(),
        };
        assert_eq!(
            format!("{error}"),
            "line 4: invalid key: empty keys are rejected"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_dictionary_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = DictionaryError::from(io_error);
        assert!(matches!(error, DictionaryError::Io(_)));
        assert_eq!(format!("{error}"), "failed to read input: missing");
    }
}
