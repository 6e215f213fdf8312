//! Key requirements for [`RedBlackTree`](super::RedBlackTree).

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A type that can be stored as a tree key.
///
/// Keys are totally ordered through [`Ord`]. [`is_empty_key`] lets the
/// tree apply its [`EmptyKeyPolicy`]; types without a notion of emptiness
/// keep the default and are never rejected.
///
/// [`is_empty_key`]: TreeKey::is_empty_key
/// [`EmptyKeyPolicy`]: crate::config::EmptyKeyPolicy
///
/// # Examples
///
/// ```rust
/// use rbdict::TreeKey;
///
/// assert!(String::new().is_empty_key());
/// assert!(!"word".is_empty_key());
/// assert!(!0_u32.is_empty_key());
/// ```
pub trait TreeKey: Ord {
    /// Returns `true` if this key counts as empty.
    fn is_empty_key(&self) -> bool {
        false
    }
}

impl TreeKey for String {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

impl TreeKey for &str {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

impl TreeKey for Box<str> {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

impl TreeKey for Rc<str> {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

impl TreeKey for Arc<str> {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

impl TreeKey for Cow<'_, str> {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Ord> TreeKey for Vec<T> {
    fn is_empty_key(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_tree_key_for_scalars {
    ($($scalar:ty),* $(,)?) => {
        $(impl TreeKey for $scalar {})*
    };
}

impl_tree_key_for_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool,
);
