//! Face identification and per-face data storage.
//!
//! ## Face
//!
//! The six faces of the cube, ordered up, right, front, down, left, back.
//! This URFDLB order is the serialization order of the facelet string and
//! is a design contract consumed by downstream renderers.
//!
//! ## FaceMap
//!
//! Per-face data storage backed by a fixed `[T; 6]` for O(1) access.
//! Supports iteration and indexing by `Face`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;

/// One of the six cube faces.
///
/// Declaration order is the URFDLB serialization order; `Face::index`
/// follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// All faces in serialization order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Position of this face in the serialization order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color this face holds in the canonical solved configuration.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Back => Color::Blue,
        }
    }

    /// The single-letter move notation for this face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    /// Look up a face by its move-notation letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::Up),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'D' => Some(Face::Down),
            'L' => Some(Face::Left),
            'B' => Some(Face::Back),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Per-face data storage with O(1) access.
///
/// Backed by a `[T; 6]` with one entry per face, in serialization order.
/// Use `FaceMap::new()` to create with a factory function, or
/// `FaceMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use twisty::cube::{Face, FaceMap};
///
/// let mut counts: FaceMap<u32> = FaceMap::with_value(0);
///
/// counts[Face::Up] = 9;
/// assert_eq!(counts[Face::Up], 9);
/// assert_eq!(counts[Face::Back], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    ///
    /// The factory receives the `Face` for each entry.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, face: Face) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (Face, &T) pairs in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.iter().copied().zip(self.data.iter())
    }

    /// Iterate over (Face, &mut T) pairs in serialization order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Face, &mut T)> {
        Face::ALL.iter().copied().zip(self.data.iter_mut())
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        self.get(face)
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        self.get_mut(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_order_is_urfdlb() {
        let letters: String = Face::ALL.iter().map(|f| f.letter()).collect();
        assert_eq!(letters, "URFDLB");
    }

    #[test]
    fn test_face_index_matches_all_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_letter_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
        assert_eq!(Face::from_letter('u'), None);
    }

    #[test]
    fn test_solved_colors_are_distinct() {
        let mut colors: Vec<_> = Face::ALL.iter().map(|f| f.solved_color()).collect();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn test_face_map_new() {
        let map: FaceMap<usize> = FaceMap::new(|f| f.index() * 10);

        assert_eq!(map[Face::Up], 0);
        assert_eq!(map[Face::Right], 10);
        assert_eq!(map[Face::Back], 50);
    }

    #[test]
    fn test_face_map_mutation() {
        let mut map: FaceMap<i32> = FaceMap::with_value(0);

        map[Face::Front] = 7;
        assert_eq!(map[Face::Front], 7);
        assert_eq!(map[Face::Down], 0);
    }

    #[test]
    fn test_face_map_iter() {
        let map: FaceMap<usize> = FaceMap::new(|f| f.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (Face::Up, &0));
        assert_eq!(pairs[5], (Face::Back, &5));
    }

    #[test]
    fn test_face_map_serialization() {
        let map: FaceMap<u8> = FaceMap::new(|f| f.index() as u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: FaceMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
