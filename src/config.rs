//! Tree configuration.
//!
//! [`TreeConfig`] decides how [`RedBlackTree::insert`] treats empty keys
//! and keys that are already present.
//!
//! # Examples
//!
//! ```rust
//! use rbdict::{DuplicatePolicy, EmptyKeyPolicy, RedBlackTree, TreeConfig};
//!
//! let config = TreeConfig::new()
//!     .with_empty_keys(EmptyKeyPolicy::Allow)
//!     .with_duplicates(DuplicatePolicy::Replace);
//!
//! let mut tree = RedBlackTree::with_config(config);
//! assert_eq!(tree.insert(String::new()), Ok(true));
//! ```
//!
//! [`RedBlackTree::insert`]: crate::tree::RedBlackTree::insert

/// How the tree treats keys for which [`TreeKey::is_empty_key`] holds.
///
/// [`TreeKey::is_empty_key`]: crate::tree::TreeKey::is_empty_key
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyKeyPolicy {
    /// Empty keys fail with [`InvalidKeyError`](crate::error::InvalidKeyError).
    #[default]
    Reject,
    /// Empty keys are stored like any other key.
    Allow,
}

/// How the tree treats a key equal to one it already holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Leave the tree untouched.
    #[default]
    Ignore,
    /// Swap the stored key for the incoming one. Shape and colors stay as
    /// they are.
    Replace,
}

/// Insertion behavior of a [`RedBlackTree`](crate::tree::RedBlackTree).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// config file only needs to name what it changes:
///
/// ```yaml
/// duplicates: replace
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TreeConfig {
    /// Policy for empty keys.
    pub empty_keys: EmptyKeyPolicy,
    /// Policy for keys already in the tree.
    pub duplicates: DuplicatePolicy,
}

impl TreeConfig {
    /// Creates the default configuration: empty keys are rejected and
    /// duplicates are ignored.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            empty_keys: EmptyKeyPolicy::Reject,
            duplicates: DuplicatePolicy::Ignore,
        }
    }

    /// Returns this configuration with a different empty-key policy.
    #[inline]
    #[must_use]
    pub const fn with_empty_keys(self, empty_keys: EmptyKeyPolicy) -> Self {
        Self { empty_keys, ..self }
    }

    /// Returns this configuration with a different duplicate policy.
    #[inline]
    #[must_use]
    pub const fn with_duplicates(self, duplicates: DuplicatePolicy) -> Self {
        Self { duplicates, ..self }
    }
}
