//! Orchestration layer above the cube: scramble, solve, step navigation.
//!
//! A `Session` is the explicitly owned state an interactive frontend keeps
//! per user, minus the frontend itself.

pub mod state;

pub use state::{Session, SessionBuilder, DEFAULT_SCRAMBLE_LEN};
