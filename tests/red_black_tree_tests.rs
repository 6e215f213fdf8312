//! Integration tests for RedBlackTree.
//!
//! The ten-letter fixture below has a fully known shape; every insert
//! exercises one of the fix-up cases on the way.

use rbdict::prelude::*;
use rstest::{fixture, rstest};

/// `height <= 2 * log2(len + 1)`, compared as `2^height <= (len + 1)^2`.
fn within_height_bound(height: usize, len: usize) -> bool {
    u32::try_from(height)
        .ok()
        .and_then(|height| 1u128.checked_shl(height))
        .is_some_and(|power| power <= (len as u128 + 1).pow(2))
}

// =============================================================================
// Fixtures
// =============================================================================

const LETTERS: [&str; 10] = ["D", "B", "A", "C", "F", "E", "H", "G", "I", "J"];

#[fixture]
fn letters() -> RedBlackTree {
    let mut tree = RedBlackTree::new();
    for letter in LETTERS {
        assert_eq!(tree.insert(letter.to_string()), Ok(true));
    }
    tree
}

/// `(key, color, parent key)` for every node in pre-order; the root's
/// parent is written as an empty string.
fn listing(tree: &RedBlackTree) -> Vec<(String, Color, String)> {
    let mut rows = Vec::new();
    tree.traverse_pre_order(|node| {
        rows.push((
            node.key().clone(),
            node.color(),
            node.parent_key().cloned().unwrap_or_default(),
        ));
    });
    rows
}

// =============================================================================
// Reference Scenario
// =============================================================================

#[rstest]
fn test_letters_pre_order(letters: RedBlackTree) {
    let keys: String = letters.pre_order().map(|node| node.key().as_str()).collect();
    assert_eq!(keys, "DBACFEHGIJ");
}

#[rstest]
fn test_letters_colors_and_parents(letters: RedBlackTree) {
    use Color::{Black, Red};

    let expected = [
        ("D", Black, ""),
        ("B", Black, "D"),
        ("A", Black, "B"),
        ("C", Black, "B"),
        ("F", Black, "D"),
        ("E", Black, "F"),
        ("H", Red, "F"),
        ("G", Black, "H"),
        ("I", Black, "H"),
        ("J", Red, "I"),
    ]
    .map(|(key, color, parent)| (key.to_string(), color, parent.to_string()));

    assert_eq!(listing(&letters), expected);
}

#[rstest]
fn test_letters_printed_listing(letters: RedBlackTree) {
    let mut printed = String::new();
    letters.traverse_pre_order(|node| {
        printed.push_str(&format!(
            "{} {} {}\n",
            node.key(),
            node.color(),
            node.parent_key().map_or("-", String::as_str)
        ));
    });
    assert_eq!(
        printed,
        "D BLACK -\nB BLACK D\nA BLACK B\nC BLACK B\nF BLACK D\n\
         E BLACK F\nH RED F\nG BLACK H\nI BLACK H\nJ RED I\n"
    );
}

#[rstest]
fn test_letters_structure(letters: RedBlackTree) {
    assert_eq!(letters.len(), 10);
    assert_eq!(letters.validate(), Ok(3));
    assert_eq!(letters.height(), 5);

    let root = letters.root().unwrap();
    assert_eq!(root.key(), "D");
    assert!(root.is_root());
    assert_eq!(root.left().map(|node| node.key().as_str()), Some("B"));
    assert_eq!(root.right().map(|node| node.key().as_str()), Some("F"));
}

#[rstest]
fn test_letters_relations(letters: RedBlackTree) {
    let j = letters.lookup("J").unwrap();
    assert_eq!(j.parent().map(|node| node.key().as_str()), Some("I"));
    assert_eq!(j.grandparent().map(|node| node.key().as_str()), Some("H"));
    assert_eq!(j.aunt().map(|node| node.key().as_str()), Some("G"));
    assert!(j.sibling().is_none());
    assert!(!j.is_left_child());

    let g = letters.lookup("G").unwrap();
    assert!(g.is_left_child());
    assert_eq!(g.sibling().map(|node| node.key().as_str()), Some("I"));
}

#[rstest]
fn test_letters_leaves(letters: RedBlackTree) {
    let leaves: String = letters
        .pre_order()
        .filter(|node| node.is_leaf())
        .map(|node| node.key().as_str())
        .collect();
    assert_eq!(leaves, "ACEGJ");
    // "I" has only a right child
    assert!(!letters.lookup("I").unwrap().is_leaf());
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
#[case("A")]
#[case("D")]
#[case("H")]
#[case("J")]
fn test_lookup_present(letters: RedBlackTree, #[case] key: &str) {
    let node = letters.lookup(key).unwrap();
    assert_eq!(node.key(), key);
    assert!(letters.contains(key));
}

#[rstest]
#[case("")]
#[case("0")]
#[case("AA")]
#[case("K")]
#[case("d")]
fn test_lookup_absent(letters: RedBlackTree, #[case] key: &str) {
    assert!(letters.lookup(key).is_none());
    assert!(!letters.contains(key));
}

#[rstest]
fn test_lookup_on_empty_tree() {
    let tree: RedBlackTree = RedBlackTree::new();
    assert!(tree.lookup("anything").is_none());
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), 0);
}

// =============================================================================
// Insert Policies
// =============================================================================

#[rstest]
fn test_duplicate_insert_leaves_tree_unchanged(mut letters: RedBlackTree) {
    let before = listing(&letters);
    for letter in LETTERS {
        assert_eq!(letters.insert(letter.to_string()), Ok(false));
    }
    assert_eq!(letters.len(), 10);
    assert_eq!(listing(&letters), before);
}

#[rstest]
fn test_empty_key_rejected_by_default(mut letters: RedBlackTree) {
    let error = letters.insert(String::new()).unwrap_err();
    assert_eq!(error.reason, InvalidKeyReason::Empty);
    assert_eq!(letters.len(), 10);
}

#[rstest]
fn test_empty_key_allowed_sorts_first() {
    let config = TreeConfig::new().with_empty_keys(EmptyKeyPolicy::Allow);
    let mut tree = RedBlackTree::with_config(config);
    for key in ["b", "", "a"] {
        assert_eq!(tree.insert(key.to_string()), Ok(true));
    }
    let keys: Vec<&str> = tree.iter().map(String::as_str).collect();
    assert_eq!(keys, ["", "a", "b"]);
    assert!(tree.lookup("").is_some());
}

#[rstest]
fn test_try_from_keys_stops_at_empty_key() {
    let result = RedBlackTree::try_from_keys(["x", "", "y"].map(String::from));
    assert!(result.is_err());

    let tree = RedBlackTree::try_from_keys(["x", "y"].map(String::from)).unwrap();
    assert_eq!(tree.len(), 2);
}

// =============================================================================
// Growth
// =============================================================================

#[rstest]
#[case::ascending((0..1_000).collect::<Vec<u32>>())]
#[case::descending((0..1_000).rev().collect::<Vec<u32>>())]
#[case::interleaved((0..500).flat_map(|index| [index, 999 - index]).collect::<Vec<u32>>())]
fn test_sequential_inserts_stay_balanced(#[case] keys: Vec<u32>) {
    let tree: RedBlackTree<u32> = keys.into_iter().collect();
    assert_eq!(tree.len(), 1_000);
    assert!(tree.validate().is_ok());
    // 2 * log2(1001) is just under 20
    assert!(tree.height() <= 19, "height {}", tree.height());
    assert!(within_height_bound(tree.height(), tree.len()));
    assert!(tree.iter().copied().eq(0..1_000));
}

#[rstest]
fn test_height_bound_holds_after_every_insert() {
    for size in 1..=600u32 {
        // 7919 is prime, so stepping by it visits every key below `size`
        let scattered = (0..size).map(|index| (index * 7_919) % size);
        for keys in [
            scattered.collect::<Vec<_>>(),
            (0..size).collect(),
            (0..size).rev().collect(),
        ] {
            let mut tree = RedBlackTree::new();
            for key in keys {
                assert_eq!(tree.insert(key), Ok(true));
            }
            assert!(tree.validate().is_ok());
            assert!(
                within_height_bound(tree.height(), tree.len()),
                "size {size}: height {}",
                tree.height()
            );
        }
    }
}

#[rstest]
#[case(1, 1, true)]
#[case(4, 4, true)]
#[case(5, 4, false)]
#[case(6, 4, false)]
#[case(19, 1_000, true)]
#[case(20, 1_000, false)]
fn test_height_bound_is_exact(#[case] height: usize, #[case] len: usize, #[case] holds: bool) {
    assert_eq!(within_height_bound(height, len), holds);
}
