//! Parsing the 54-character facelet string into a display model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cube::{Cube, Face, FaceMap};

use super::display::{display_color, Rgb};

/// Error parsing a facelet string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetError {
    /// The string was not exactly 54 characters long.
    #[error("facelet string must be exactly 54 characters, got {0}")]
    Length(usize),
}

/// The display model of one cube state: six faces of 9 display colors,
/// sliced from a facelet string per the URFDLB contract.
///
/// This is a decode layer for renderers, not a renderer itself: it
/// produces per-face colors and no markup.
///
/// ## Example
///
/// ```
/// use twisty::cube::{Cube, Face};
/// use twisty::net::CubeNet;
///
/// let net = CubeNet::parse(&Cube::solved().facelet_string()).unwrap();
/// assert_eq!(net.facelet(Face::Up, 0).hex(), "#ffffff");
/// assert_eq!(net.facelet(Face::Right, 4).hex(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeNet {
    faces: FaceMap<[Rgb; 9]>,
}

impl CubeNet {
    /// Parse a facelet string into its display model.
    ///
    /// Rejects any string whose length is not exactly 54; otherwise slices
    /// it into the 6 ordered 9-character faces (up, right, front, down,
    /// left, back), mapping each character to a display color with a
    /// neutral fallback for unrecognized ones.
    pub fn parse(facelets: &str) -> Result<Self, NetError> {
        let chars: Vec<char> = facelets.chars().collect();
        if chars.len() != 54 {
            return Err(NetError::Length(chars.len()));
        }

        let mut faces = FaceMap::with_value([display_color(' '); 9]);
        for face in Face::ALL {
            for i in 0..9 {
                faces[face][i] = display_color(chars[face.index() * 9 + i]);
            }
        }
        Ok(Self { faces })
    }

    /// The 9 display colors of one face, row-major from the top-left.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Rgb; 9] {
        &self.faces[face]
    }

    /// One facelet's display color.
    #[must_use]
    pub fn facelet(&self, face: Face, index: usize) -> Rgb {
        self.faces[face][index]
    }
}

impl From<&Cube> for CubeNet {
    /// Build the display model directly from a cube, bypassing the string.
    fn from(cube: &Cube) -> Self {
        Self {
            faces: FaceMap::new(|face| cube.face(face).map(|c| display_color(c.symbol()))),
        }
    }
}
