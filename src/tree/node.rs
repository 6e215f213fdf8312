//! Arena nodes and the read-only handles handed out to callers.

use std::fmt;

use super::{Color, RedBlackTree};

// =============================================================================
// NodeId
// =============================================================================

/// A stable handle to a node in a [`RedBlackTree`].
///
/// Nodes are never removed, so a `NodeId` stays valid for the lifetime of
/// the tree that issued it. Rotations move nodes around but never change
/// which key a `NodeId` names.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the tree's arena, which is also its
    /// insertion order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

// =============================================================================
// Side
// =============================================================================

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

/// Storage unit of the arena.
///
/// `left` and `right` own their children; `parent` is a back-reference.
/// A missing child is `None`, never a placeholder node.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Creates a new red leaf hanging off `parent`.
    pub(crate) const fn new_red(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// A read-only view of one node, borrowed from its tree.
///
/// Handed out by [`RedBlackTree::lookup`], [`RedBlackTree::root`] and the
/// traversals. It can walk to related nodes but cannot change anything.
///
/// # Examples
///
/// ```rust
/// use rbdict::{Color, RedBlackTree};
///
/// let tree: RedBlackTree = ["b", "a", "c"].map(String::from).into_iter().collect();
///
/// let leaf = tree.lookup("a").unwrap();
/// assert_eq!(leaf.key(), "a");
/// assert_eq!(leaf.color(), Color::Red);
/// assert_eq!(leaf.parent_key().map(String::as_str), Some("b"));
/// assert_eq!(leaf.sibling().map(|node| node.key().as_str()), Some("c"));
/// assert!(leaf.is_left_child());
/// assert!(leaf.is_leaf());
/// assert!(!tree.root().unwrap().is_leaf());
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a RedBlackTree<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    #[inline]
    pub(crate) const fn new(tree: &'a RedBlackTree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<K> {
        self.tree.node_at(self.id)
    }

    #[inline]
    fn related(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// The handle of this node.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// The current color of this node.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Returns `true` if this node is red.
    #[inline]
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    /// Returns `true` if this node is black.
    #[inline]
    #[must_use]
    pub fn is_black(&self) -> bool {
        self.color().is_black()
    }

    /// Returns `true` if this node is the root of its tree.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().left.is_none() && self.node().right.is_none()
    }

    /// The parent node, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.related(self.node().parent)
    }

    /// The parent's key, or `None` at the root.
    #[must_use]
    pub fn parent_key(&self) -> Option<&'a K> {
        self.parent().map(|parent| parent.key())
    }

    /// The left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.related(self.node().left)
    }

    /// The right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.related(self.node().right)
    }

    /// The parent's parent, if any.
    #[must_use]
    pub fn grandparent(&self) -> Option<Self> {
        self.related(self.tree.grandparent(self.id))
    }

    /// The other child of this node's parent, if any.
    #[must_use]
    pub fn sibling(&self) -> Option<Self> {
        self.related(self.tree.sibling(self.id))
    }

    /// The sibling of this node's parent, if any.
    #[must_use]
    pub fn aunt(&self) -> Option<Self> {
        self.related(self.tree.aunt(self.id))
    }

    /// Returns `true` if this node sits in its parent's left slot.
    /// The root is neither a left nor a right child.
    #[must_use]
    pub fn is_left_child(&self) -> bool {
        self.node()
            .parent
            .is_some_and(|parent| self.tree.is_left_child(parent, self.id))
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("color", &self.color())
            .field("parent_key", &self.parent_key())
            .finish()
    }
}

impl<K: fmt::Display> fmt::Display for NodeRef<'_, K> {
    /// Formats as `key (COLOR)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.key(), self.color())
    }
}
