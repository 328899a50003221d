//! Core cube types: colors, faces, moves, the state value, scramble RNG.
//!
//! The cube state is a plain value with no ambient singleton; callers hold
//! a `Cube` and pass it to every operation.

pub mod color;
pub mod face;
pub mod moves;
pub mod rng;
pub mod state;

pub use color::Color;
pub use face::{Face, FaceMap};
pub use moves::{notation, Move, MoveSeq, Turn};
pub use rng::ScrambleRng;
pub use state::{Cube, Facelets};
