//! # twisty
//!
//! A 3×3×3 twisty puzzle state engine with a scripted beginner-method
//! walkthrough.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The cube is a plain `Copy` value with no ambient
//!    singleton. Callers hold a `Cube` (or a `Session`) and pass it to
//!    every operation; copies are structural and independent.
//!
//! 2. **Moves Are Bijections**: Every quarter turn is a permutation of the
//!    54 facelet slots, built from one in-place face rotation plus one
//!    fixed border ring cycle. Counter-clockwise tables are exact inverses
//!    by construction, so `m` then `m.inverse()` is always the identity
//!    and every turn has order 4.
//!
//! 3. **One Wire Contract**: The only external surface is the 54-character
//!    facelet string, faces in URFDLB order, row-major within each face.
//!    The `net` module is the consuming side of that contract.
//!
//! ## Modules
//!
//! - `cube`: Colors, faces, moves, the cube state, scramble RNG
//! - `net`: Facelet-string decoding into per-face display colors
//! - `solver`: The fixed beginner-method walkthrough script
//! - `session`: Scramble/solve/navigate orchestration state

pub mod cube;
pub mod net;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::cube::{notation, Color, Cube, Face, FaceMap, Facelets, Move, MoveSeq, ScrambleRng, Turn};

pub use crate::net::{display_color, CubeNet, NetError, Rgb};

pub use crate::solver::{ScriptedSolver, SolveStep, Walkthrough, SCRIPT_MOVE_COUNT};

pub use crate::session::{Session, SessionBuilder, DEFAULT_SCRAMBLE_LEN};
