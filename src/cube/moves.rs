//! Move representation: face + rotation sense.
//!
//! A move is one of 12 symbols: a face paired with a rotation sense.
//! Moves are stateless and have no identity beyond their symbol; they are
//! pure function descriptors consumed by the cube state.
//!
//! ## Notation
//!
//! The face letter, with a trailing apostrophe for counter-clockwise:
//! `U` is a clockwise quarter turn of the up face, `U'` its inverse.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::face::Face;

/// Rotation sense of a quarter turn, viewed looking at the turning face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Turn {
    /// The opposite rotation sense.
    #[must_use]
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

/// A single quarter turn of one face.
///
/// ## Example
///
/// ```
/// use twisty::cube::{Face, Move, Turn};
///
/// let r = Move::clockwise(Face::Right);
/// assert_eq!(r.to_string(), "R");
/// assert_eq!(r.inverse().to_string(), "R'");
/// assert_eq!(Move::from_symbol("R'"), Some(r.inverse()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The turning face.
    pub face: Face,
    /// The rotation sense.
    pub turn: Turn,
}

/// A sequence of moves (a scramble or an algorithm).
///
/// SmallVec keeps typical sequences (scrambles of 20, algorithms up to ~16
/// moves) off the heap.
pub type MoveSeq = SmallVec<[Move; 20]>;

impl Move {
    /// All 12 moves, clockwise and counter-clockwise per face.
    pub const ALL: [Move; 12] = {
        let mut all = [Move::clockwise(Face::Up); 12];
        let mut i = 0;
        while i < 6 {
            all[i * 2] = Move::clockwise(Face::ALL[i]);
            all[i * 2 + 1] = Move::counter_clockwise(Face::ALL[i]);
            i += 1;
        }
        all
    };

    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Clockwise quarter turn of `face`.
    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, Turn::Clockwise)
    }

    /// Counter-clockwise quarter turn of `face`.
    #[must_use]
    pub const fn counter_clockwise(face: Face) -> Self {
        Self::new(face, Turn::CounterClockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Self::new(self.face, self.turn.inverse())
    }

    /// Parse a move from its notation symbol.
    ///
    /// Accepts exactly the 12 canonical symbols (`U`, `U'`, ..., `B`, `B'`);
    /// anything else, including trailing garbage, returns `None`.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Move> {
        let mut chars = s.chars();
        let face = Face::from_letter(chars.next()?)?;
        let turn = match chars.next() {
            None => Turn::Clockwise,
            Some('\'') if chars.next().is_none() => Turn::CounterClockwise,
            Some(_) => return None,
        };
        Some(Move::new(face, turn))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{}", self.face.letter()),
            Turn::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}

/// Format a move sequence as space-separated notation (`"R U R' U'"`).
#[must_use]
pub fn notation(moves: &[Move]) -> String {
    let symbols: Vec<String> = moves.iter().map(Move::to_string).collect();
    symbols.join(" ")
}
