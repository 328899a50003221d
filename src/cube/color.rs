//! Sticker colors and their one-letter facelet symbols.
//!
//! A color is a pure label: the engine tracks no sticker identity or
//! orientation beyond the symbol itself.

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
///
/// Each color has a one-ASCII-letter symbol used by the facelet string:
/// `w`, `r`, `g`, `y`, `o`, `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// Number of distinct colors.
    pub const COUNT: usize = 6;

    /// All colors, in solved-face order (up, right, front, down, left, back).
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// The one-letter facelet symbol for this color.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Blue => 'b',
        }
    }

    /// Look up a color by its facelet symbol.
    ///
    /// Returns `None` for any character outside the six symbols.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'o' => Some(Color::Orange),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
