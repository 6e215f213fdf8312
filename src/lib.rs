//! # rbdict
//!
//! An arena-backed red-black tree and the string dictionary built on it.
//!
//! ## Overview
//!
//! - **Red-Black Tree**: [`RedBlackTree`], an ordered set with O(log N)
//!   insert and lookup, a pre-order visitor and in-order iteration
//! - **Configuration**: [`TreeConfig`] decides how empty and duplicate keys
//!   are treated
//! - **Shared Access**: [`SharedTree`] serializes writers against readers
//!   behind a read-write lock
//! - **Dictionary**: [`Dictionary`] loads a word list and spell-checks text
//!
//! ## Feature Flags
//!
//! - `shared`: [`SharedTree`] (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for the tree, colors and config
//! - `tracing`: structured logs for insertion and rebalancing
//! - `validate-on-insert`: re-check every invariant after each insert
//!   in debug builds
//! - `full`: `shared`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use rbdict::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! for key in ["D", "B", "A", "C"] {
//!     tree.insert(key.to_string()).unwrap();
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), "B");
//! assert_eq!(root.color(), Color::Black);
//! assert!(tree.lookup("C").is_some());
//! assert!(tree.lookup("Z").is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod tracing_helpers;

pub mod config;
pub mod dictionary;
pub mod error;
pub mod tree;

#[cfg(feature = "shared")]
pub mod shared;

pub use config::{DuplicatePolicy, EmptyKeyPolicy, TreeConfig};
pub use dictionary::{Dictionary, SpellCheckReport, WordCheck, normalize_word};
pub use error::{DictionaryError, InvalidKeyError, InvalidKeyReason, InvariantViolation};
pub use tree::{Color, NodeId, NodeRef, RedBlackTree, TreeKey};

#[cfg(feature = "shared")]
pub use shared::SharedTree;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use rbdict::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::*;
    pub use crate::dictionary::{Dictionary, SpellCheckReport, WordCheck, normalize_word};
    pub use crate::error::*;
    pub use crate::tree::{Color, NodeId, NodeRef, RedBlackTree, TreeKey};

    #[cfg(feature = "shared")]
    pub use crate::shared::SharedTree;
}
