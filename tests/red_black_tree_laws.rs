//! Property-based tests for RedBlackTree.
//!
//! Random insert sequences must keep every red-black invariant, keep
//! lookups exact and keep the height logarithmic.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rbdict::RedBlackTree;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Keys drawn from a narrow range so that duplicates are common.
fn crowded_keys(max_size: usize) -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..64, 0..max_size)
}

/// Non-empty lowercase words.
fn words(max_size: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..max_size)
}

/// `height <= 2 * log2(len + 1)`, compared as `2^height <= (len + 1)^2`.
fn within_height_bound(height: usize, len: usize) -> bool {
    u32::try_from(height)
        .ok()
        .and_then(|height| 1u128.checked_shl(height))
        .is_some_and(|power| power <= (len as u128 + 1).pow(2))
}

// =============================================================================
// Invariant Laws
// =============================================================================

proptest! {
    /// Law: every insert leaves a valid red-black tree behind.
    #[test]
    fn prop_invariants_hold_after_every_insert(keys in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut tree = RedBlackTree::new();
        for key in keys {
            tree.insert(key).unwrap();
            prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
        }
    }

    /// Law: height never exceeds 2 * log2(N + 1).
    #[test]
    fn prop_height_is_logarithmic(keys in prop::collection::vec(any::<u32>(), 1..500)) {
        let tree: RedBlackTree<u32> = keys.into_iter().collect();
        prop_assert!(
            within_height_bound(tree.height(), tree.len()),
            "height {} for {} keys",
            tree.height(),
            tree.len()
        );
    }

    /// Law: a tree of black-height `h` holds at least `2^h - 1` keys.
    #[test]
    fn prop_black_height_bounds_size(keys in prop::collection::vec(any::<u32>(), 1..300)) {
        let tree: RedBlackTree<u32> = keys.into_iter().collect();
        let black_height = tree.validate().unwrap();
        prop_assert!(black_height >= 1);
        prop_assert!((1usize << black_height) - 1 <= tree.len());
    }
}

// =============================================================================
// Lookup Laws
// =============================================================================

proptest! {
    /// Law: every inserted key is found and carries itself as key.
    #[test]
    fn prop_lookup_finds_inserted(keys in words(100)) {
        let tree: RedBlackTree = keys.iter().cloned().collect();
        for key in &keys {
            let node = tree.lookup(key.as_str());
            prop_assert!(node.is_some());
            prop_assert_eq!(node.unwrap().key(), key);
        }
    }

    /// Law: lookup agrees with a reference set for arbitrary probes.
    #[test]
    fn prop_lookup_matches_reference(keys in crowded_keys(80), probes in crowded_keys(40)) {
        let tree: RedBlackTree<u16> = keys.iter().copied().collect();
        let reference: BTreeSet<u16> = keys.into_iter().collect();
        for probe in probes {
            prop_assert_eq!(tree.contains(&probe), reference.contains(&probe));
        }
    }
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Law: in-order traversal is strictly ascending and equals the
    /// deduplicated, sorted input.
    #[test]
    fn prop_in_order_is_sorted_input(keys in crowded_keys(120)) {
        let tree: RedBlackTree<u16> = keys.iter().copied().collect();
        let reference: Vec<u16> = keys.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let in_order: Vec<u16> = tree.iter().copied().collect();
        prop_assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(in_order, reference);
    }

    /// Law: pre-order visits every key exactly once.
    #[test]
    fn prop_pre_order_is_a_permutation(keys in words(60)) {
        let tree: RedBlackTree = keys.iter().cloned().collect();
        let mut visited: Vec<String> = Vec::new();
        tree.traverse_pre_order(|node| visited.push(node.key().clone()));
        prop_assert_eq!(visited.len(), tree.len());
        visited.sort();
        let reference: Vec<String> = keys.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(visited, reference);
    }

    /// Law: pre-order starts at the root, and every node's parent was
    /// visited before it.
    #[test]
    fn prop_pre_order_visits_parents_first(keys in crowded_keys(100)) {
        let tree: RedBlackTree<u16> = keys.into_iter().collect();
        let mut seen = BTreeSet::new();
        for (index, node) in tree.pre_order().enumerate() {
            prop_assert_eq!(index == 0, node.is_root());
            if let Some(parent) = node.parent_key() {
                prop_assert!(seen.contains(parent));
            }
            seen.insert(*node.key());
        }
    }
}

// =============================================================================
// Duplicate Laws
// =============================================================================

proptest! {
    /// Law: re-inserting present keys changes neither size nor shape.
    #[test]
    fn prop_duplicate_insert_is_idempotent(keys in crowded_keys(80)) {
        let mut tree: RedBlackTree<u16> = keys.iter().copied().collect();
        let shape = |tree: &RedBlackTree<u16>| -> Vec<(u16, bool, Option<u16>)> {
            tree.pre_order()
                .map(|node| (*node.key(), node.is_red(), node.parent_key().copied()))
                .collect()
        };
        let before = shape(&tree);
        for key in keys {
            prop_assert_eq!(tree.insert(key), Ok(false));
        }
        prop_assert_eq!(shape(&tree), before);
    }

    /// Law: contents depend only on the set of keys inserted.
    #[test]
    fn prop_insert_order_does_not_change_contents(keys in crowded_keys(60)) {
        let forward: RedBlackTree<u16> = keys.iter().copied().collect();
        let backward: RedBlackTree<u16> = keys.iter().rev().copied().collect();
        let doubled: RedBlackTree<u16> = keys.iter().chain(keys.iter()).copied().collect();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&forward, &doubled);
    }
}
