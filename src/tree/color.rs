//! Node coloring.

use std::fmt;

/// The color of a red-black tree node.
///
/// A single two-valued enum; there is no separate flag that could disagree
/// with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Color {
    /// Newly placed nodes start red.
    Red,
    /// The root and every absent child count as black.
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(formatter, "RED"),
            Self::Black => write!(formatter, "BLACK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Color::Red, true, "RED")]
    #[case(Color::Black, false, "BLACK")]
    fn test_color_predicates_and_display(
        #[case] color: Color,
        #[case] red: bool,
        #[case] shown: &str,
    ) {
        assert_eq!(color.is_red(), red);
        assert_eq!(color.is_black(), !red);
        assert_eq!(color.to_string(), shown);
    }
}
