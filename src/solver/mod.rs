//! Scripted beginner-method walkthrough over a cube state.
//!
//! Not a search-based solver: a fixed script of canonical algorithms,
//! recorded step by step for display.

pub mod script;
pub mod walkthrough;

pub use script::{ScriptedSolver, SCRIPT_MOVE_COUNT};
pub use walkthrough::{SolveStep, Walkthrough};
