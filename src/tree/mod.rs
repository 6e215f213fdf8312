//! Arena-backed red-black tree.
//!
//! This module provides [`RedBlackTree`], an ordered set of keys kept
//! balanced by red-black coloring.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) lookup
//! - O(N) pre-order and in-order traversal without recursion
//! - O(1) len and `is_empty`
//!
//! Nodes live in a single arena and refer to each other by [`NodeId`].
//! Every node knows its parent, so rebalancing walks upward from the
//! inserted leaf instead of rebuilding the path from the root.
//!
//! # Examples
//!
//! ```rust
//! use rbdict::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in ["delta", "bravo", "alpha"] {
//!     tree.insert(key.to_string()).unwrap();
//! }
//!
//! // "alpha" forced a rotation, so "bravo" is now the root
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), "bravo");
//! assert_eq!(root.color(), Color::Black);
//!
//! let keys: Vec<&String> = tree.iter().collect();
//! assert_eq!(keys, ["alpha", "bravo", "delta"]);
//! ```
//!
//! # Invariants
//!
//! After every insert:
//! 1. Keys in a left subtree are smaller than the node's key, keys in a
//!    right subtree are larger
//! 2. The root is black
//! 3. A red node never has a red parent
//! 4. Every path from a node down to a missing child crosses the same
//!    number of black nodes
//! 5. Missing children are `None`, never placeholder nodes
//!
//! [`RedBlackTree::validate`] checks all of them.

mod color;
mod fixup;
mod invariants;
mod key;
mod node;
mod relations;
mod rotation;
mod traversal;

pub use color::Color;
pub use key::TreeKey;
pub use node::{NodeId, NodeRef};
pub use traversal::{InOrder, Iter, PreOrder};

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::{DuplicatePolicy, EmptyKeyPolicy, TreeConfig};
use crate::error::InvalidKeyError;
use crate::tracing_helpers::{debug_log, warn_log};
use node::{Node, Side};

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered set of keys stored in a red-black tree.
///
/// Keys must implement [`TreeKey`] (an [`Ord`] type). The tree defaults to
/// `String` keys, which order lexicographically.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `new`                | O(1)       |
/// | `insert`             | O(log N)   |
/// | `lookup`             | O(log N)   |
/// | `contains`           | O(log N)   |
/// | `traverse_pre_order` | O(N)       |
/// | `iter`               | O(N)       |
/// | `height`             | O(N)       |
/// | `len`                | O(1)       |
/// | `is_empty`           | O(1)       |
///
/// # Examples
///
/// ```rust
/// use rbdict::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// assert_eq!(tree.insert("there".to_string()), Ok(true));
/// assert_eq!(tree.insert("there".to_string()), Ok(false)); // duplicate ignored
///
/// assert_eq!(tree.lookup("there").map(|node| node.key().as_str()), Some("there"));
/// assert!(tree.lookup("where").is_none());
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K = String> {
    /// Every node ever inserted, indexed by [`NodeId`]
    nodes: Vec<Node<K>>,
    /// Topmost node, `None` when empty
    root: Option<NodeId>,
    config: TreeConfig,
}

/// Where a key belongs, found by descending from the root.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Slot {
    /// An equal key is already stored here.
    Occupied(NodeId),
    /// The key would become the `side` child of the given parent, or the
    /// root when there is no parent.
    Vacant(Option<(NodeId, Side)>),
}

impl<K> RedBlackTree<K> {
    /// Creates a new empty tree with the default [`TreeConfig`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// let tree: RedBlackTree = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(TreeConfig::new())
    }

    /// Creates a new empty tree with the given configuration.
    #[inline]
    #[must_use]
    pub const fn with_config(config: TreeConfig) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            config,
        }
    }

    /// The configuration this tree was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// Returns the number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node, or `None` when the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Resolves a [`NodeId`] issued by this tree.
    ///
    /// Returns `None` for ids beyond this tree's arena. Ids are plain
    /// indices, so an id taken from another tree resolves to whichever
    /// node of this tree sits at that index.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Number of nodes on the longest path from the root to a leaf.
    /// An empty tree has height 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// // Sorted input would make a plain search tree a list of height 1023.
    /// let tree: RedBlackTree<u32> = (0..1023).collect();
    /// assert!(tree.height() <= 20);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node_at(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        deepest
    }

    #[inline]
    pub(crate) fn node_at(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_at_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_at_mut(id).color = color;
    }

    /// Links a new red leaf into `position` and returns its id. Does not
    /// rebalance.
    pub(crate) fn place(&mut self, key: K, position: Option<(NodeId, Side)>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let parent = position.map(|(parent, _)| parent);
        self.nodes.push(Node::new_red(key, parent));
        match position {
            None => self.root = Some(id),
            Some((parent, side)) => self.node_at_mut(parent).set_child(side, Some(id)),
        }
        id
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Returns the node holding a key equal to `key`, or `None` if the key
    /// is not in the tree.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// let tree: RedBlackTree = ["once", "upon"].map(String::from).into_iter().collect();
    ///
    /// // Can use &str to look up String keys
    /// let node = tree.lookup("upon").unwrap();
    /// assert_eq!(node.key(), "upon");
    /// assert_eq!(node.parent_key().map(String::as_str), Some("once"));
    /// assert!(tree.lookup("time").is_none());
    /// ```
    #[must_use]
    pub fn lookup<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find_slot(key) {
            Slot::Occupied(id) => Some(NodeRef::new(self, id)),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns `true` if the tree holds a key equal to `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.find_slot(key), Slot::Occupied(_))
    }

    /// Descends from the root towards `key`.
    pub(crate) fn find_slot<Q>(&self, key: &Q) -> Slot
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut current) = self.root else {
            return Slot::Vacant(None);
        };
        loop {
            let node = self.node_at(current);
            let side = match node.key.borrow().cmp(key) {
                Ordering::Less => Side::Right,
                Ordering::Greater => Side::Left,
                Ordering::Equal => return Slot::Occupied(current),
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Slot::Vacant(Some((current, side))),
            }
        }
    }
}

impl<K: TreeKey> RedBlackTree<K> {
    /// Inserts a key.
    ///
    /// The key is placed as a red leaf and the tree is rebalanced from
    /// there. Returns `Ok(true)` if a new node was added and `Ok(false)` if
    /// an equal key was already present; what happens to the stored key
    /// then is decided by [`DuplicatePolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] for an empty key when the tree uses
    /// [`EmptyKeyPolicy::Reject`]. The tree is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert("kept".to_string()).unwrap();
    /// tree.insert("cash".to_string()).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert!(tree.insert(String::new()).is_err());
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<bool, InvalidKeyError> {
        if self.config.empty_keys == EmptyKeyPolicy::Reject && key.is_empty_key() {
            debug_log!("insert rejected: empty key");
            return Err(InvalidKeyError::empty());
        }

        let added = match self.find_slot(&key) {
            Slot::Occupied(existing) => {
                if self.config.duplicates == DuplicatePolicy::Replace {
                    self.node_at_mut(existing).key = key;
                }
                debug_log!(node = %existing, policy = ?self.config.duplicates, "insert hit duplicate");
                false
            }
            Slot::Vacant(position) => {
                let id = self.place(key, position);
                self.fix_up(id);
                debug_log!(node = %id, len = self.len(), "insert placed new node");
                true
            }
        };

        self.debug_validate();
        Ok(added)
    }

    /// Builds a tree from `keys`, inserting them in iteration order.
    ///
    /// # Errors
    ///
    /// Stops at the first key the default configuration rejects.
    pub fn try_from_keys<I>(keys: I) -> Result<Self, InvalidKeyError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    #[cfg(all(debug_assertions, feature = "validate-on-insert"))]
    fn debug_validate(&self) {
        if let Err(violation) = self.validate() {
            panic!("red-black invariant broken after insert: {violation}");
        }
    }

    #[cfg(not(all(debug_assertions, feature = "validate-on-insert")))]
    #[inline]
    const fn debug_validate(&self) {}
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for RedBlackTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Collects keys into a tree with the default configuration.
///
/// Keys the configuration rejects are skipped; use
/// [`RedBlackTree::try_from_keys`] to surface them instead.
impl<K: TreeKey> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: TreeKey> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if self.insert(key).is_err() {
                warn_log!("skipped key rejected by tree config");
            }
        }
    }
}

/// Two trees are equal when they hold the same keys, regardless of shape
/// or configuration.
impl<K: Ord> PartialEq for RedBlackTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord> Eq for RedBlackTree<K> {}

impl<K: Ord + Hash> Hash for RedBlackTree<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for key in self {
            key.hash(state);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for RedBlackTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for RedBlackTree<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<K> {
    key_marker: std::marker::PhantomData<K>,
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Visitor<'de> for RedBlackTreeVisitor<K>
where
    K: serde::Deserialize<'de> + TreeKey,
{
    type Value = RedBlackTree<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = RedBlackTree::new();
        while let Some(key) = access.next_element()? {
            tree.insert(key).map_err(serde::de::Error::custom)?;
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for RedBlackTree<K>
where
    K: serde::Deserialize<'de> + TreeKey,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            key_marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_in_key_order() {
        let tree: RedBlackTree = ["c", "a", "b"].map(String::from).into_iter().collect();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"["a","b","c"]"#);
    }

    #[rstest]
    fn test_deserialize_rebuilds_balanced_tree() {
        let json = r#"["D","B","A","C","F","E","H","G","I","J"]"#;
        let tree: RedBlackTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.validate(), Ok(3));
        assert_eq!(tree.root().unwrap().key(), "D");
    }

    #[rstest]
    fn test_deserialize_rejects_empty_key() {
        let result = serde_json::from_str::<RedBlackTree>(r#"["a",""]"#);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_color_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), r#""RED""#);
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), r#""BLACK""#);
    }
}
