//! A red-black tree shared between threads.
//!
//! [`RedBlackTree::insert`] rewires parent and child links in place, so a
//! reader running alongside it could observe a half-finished rotation.
//! [`SharedTree`] puts the tree behind a `parking_lot::RwLock`: inserts
//! take the write lock and are serialized against each other and against
//! every reader, while lookups and traversals share the read lock.

use std::borrow::Borrow;
use std::fmt;

use parking_lot::RwLock;

use crate::config::TreeConfig;
use crate::error::InvalidKeyError;
use crate::tree::{NodeRef, RedBlackTree, TreeKey};

/// A [`RedBlackTree`] behind a read-write lock.
///
/// # Examples
///
/// ```rust
/// use rbdict::SharedTree;
/// use std::sync::Arc;
/// use std::thread;
///
/// let tree = Arc::new(SharedTree::new());
/// let writers: Vec<_> = (0..4)
///     .map(|worker| {
///         let tree = Arc::clone(&tree);
///         thread::spawn(move || {
///             for index in 0..25 {
///                 tree.insert(format!("{worker}-{index}")).unwrap();
///             }
///         })
///     })
///     .collect();
/// for writer in writers {
///     writer.join().unwrap();
/// }
///
/// assert_eq!(tree.len(), 100);
/// assert!(tree.contains("3-24"));
/// ```
pub struct SharedTree<K = String> {
    inner: RwLock<RedBlackTree<K>>,
}

impl<K> SharedTree<K> {
    /// Creates an empty shared tree with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tree(RedBlackTree::new())
    }

    /// Creates an empty shared tree with the given configuration.
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self::from_tree(RedBlackTree::with_config(config))
    }

    /// Wraps an existing tree.
    #[must_use]
    pub fn from_tree(tree: RedBlackTree<K>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }

    /// Unwraps the tree.
    #[must_use]
    pub fn into_inner(self) -> RedBlackTree<K> {
        self.inner.into_inner()
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the tree holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `reader` against the tree while holding the read lock.
    pub fn read<R>(&self, reader: impl FnOnce(&RedBlackTree<K>) -> R) -> R {
        reader(&self.inner.read())
    }

    /// Visits every node in pre-order while holding the read lock.
    pub fn traverse_pre_order<F>(&self, visitor: F)
    where
        F: FnMut(NodeRef<'_, K>),
    {
        self.inner.read().traverse_pre_order(visitor);
    }
}

impl<K: Ord> SharedTree<K> {
    /// Returns `true` if the tree holds a key equal to `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read().contains(key)
    }

    /// Looks up `key` and hands the node, if found, to `reader` while the
    /// read lock is held.
    pub fn with_node<Q, R>(
        &self,
        key: &Q,
        reader: impl FnOnce(Option<NodeRef<'_, K>>) -> R,
    ) -> R
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let tree = self.inner.read();
        reader(tree.lookup(key))
    }
}

impl<K: TreeKey> SharedTree<K> {
    /// Inserts a key while holding the write lock.
    ///
    /// # Errors
    ///
    /// Same as [`RedBlackTree::insert`].
    pub fn insert(&self, key: K) -> Result<bool, InvalidKeyError> {
        self.inner.write().insert(key)
    }
}

impl<K> Default for SharedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<RedBlackTree<K>> for SharedTree<K> {
    fn from(tree: RedBlackTree<K>) -> Self {
        Self::from_tree(tree)
    }
}

impl<K: fmt::Debug> fmt::Debug for SharedTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SharedTree")
            .field("tree", &*self.inner.read())
            .finish()
    }
}
