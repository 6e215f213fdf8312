//! Pre-order and in-order walks.
//!
//! Both walks keep an explicit stack, so deep trees never recurse.

use std::iter::FusedIterator;

use super::RedBlackTree;
use super::node::{NodeId, NodeRef};

impl<K> RedBlackTree<K> {
    /// Calls `visitor` on every node in pre-order: a node, then its left
    /// subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// let tree: RedBlackTree = ["D", "B", "A", "C", "F", "E", "H", "G", "I", "J"]
    ///     .map(String::from)
    ///     .into_iter()
    ///     .collect();
    ///
    /// let mut visited = String::new();
    /// tree.traverse_pre_order(|node| visited.push_str(node.key()));
    /// assert_eq!(visited, "DBACFEHGIJ");
    /// ```
    pub fn traverse_pre_order<F>(&self, visitor: F)
    where
        F: FnMut(NodeRef<'_, K>),
    {
        self.pre_order().for_each(visitor);
    }

    /// Returns an iterator over the nodes in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over the nodes in ascending key order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iterator = InOrder {
            tree: self,
            stack: Vec::new(),
            remaining: self.len(),
        };
        iterator.push_left_spine(self.root);
        iterator
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbdict::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            nodes: self.in_order(),
        }
    }

    /// Same as [`RedBlackTree::iter`].
    #[inline]
    pub fn keys(&self) -> Iter<'_, K> {
        self.iter()
    }
}

// =============================================================================
// PreOrder
// =============================================================================

/// Pre-order iterator over the nodes of a [`RedBlackTree`].
pub struct PreOrder<'a, K> {
    tree: &'a RedBlackTree<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node_at(id);
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining = self.remaining.saturating_sub(1);
        Some(NodeRef::new(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {}

impl<K> FusedIterator for PreOrder<'_, K> {}

// =============================================================================
// InOrder
// =============================================================================

/// In-order (ascending) iterator over the nodes of a [`RedBlackTree`].
pub struct InOrder<'a, K> {
    tree: &'a RedBlackTree<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<K> InOrder<'_, K> {
    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.node_at(id).left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.node_at(id).right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(NodeRef::new(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}

impl<K> FusedIterator for InOrder<'_, K> {}

// =============================================================================
// Iter
// =============================================================================

/// An iterator over the keys of a [`RedBlackTree`] in ascending order.
pub struct Iter<'a, K> {
    nodes: InOrder<'a, K>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_tree_yields_nothing() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.pre_order().count(), 0);
        assert_eq!(tree.in_order().count(), 0);
        let mut visits = 0;
        tree.traverse_pre_order(|_| visits += 1);
        assert_eq!(visits, 0);
    }

    #[rstest]
    fn test_pre_order_visits_root_first() {
        let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
        let keys: Vec<i32> = tree.pre_order().map(|node| *node.key()).collect();
        assert_eq!(keys, vec![2, 1, 3]);
    }

    #[rstest]
    fn test_in_order_is_sorted_and_exact_size() {
        let tree: RedBlackTree<i32> = [5, 9, 1, 7, 3, 8, 2].into_iter().collect();
        let mut iterator = tree.iter();
        assert_eq!(iterator.len(), 7);
        iterator.next();
        assert_eq!(iterator.len(), 6);
        let rest: Vec<i32> = iterator.copied().collect();
        assert_eq!(rest, vec![2, 3, 5, 7, 8, 9]);
    }

    #[rstest]
    fn test_into_iterator_for_reference() {
        let tree: RedBlackTree<i32> = [2, 1].into_iter().collect();
        let mut total = 0;
        for key in &tree {
            total += key;
        }
        assert_eq!(total, 3);
        assert!(tree.keys().eq(tree.iter()));
    }
}
