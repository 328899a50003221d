//! Facelet-string decoding for renderers.
//!
//! The engine's external contract is its 54-character facelet string. This
//! module is the consuming side of that contract: it validates the length,
//! slices the string back into the six ordered faces, and maps each symbol
//! to a display color. No markup or graphics output is produced here.

pub mod display;
pub mod parse;

pub use display::{display_color, Rgb, FALLBACK};
pub use parse::{CubeNet, NetError};
