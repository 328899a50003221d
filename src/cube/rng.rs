//! Deterministic random number generation for scrambles.
//!
//! Same seed, same scramble: a `ScrambleRng` built from a given seed
//! always yields the same move sequence, so scrambles are replayable in
//! tests and across sessions. An entropy-seeded constructor covers casual
//! use; the seed it drew is still queryable afterwards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::Move;

/// Deterministic RNG for drawing scramble moves.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct ScrambleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ScrambleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The drawn seed is recorded and available via `seed()`, so even an
    /// entropy-seeded scramble can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one move uniformly from the 12-move set.
    ///
    /// Sampling is independent per call; no filtering of repeats or
    /// immediate inverses.
    pub fn pick_move(&mut self) -> Move {
        Move::ALL[self.inner.gen_range(0..Move::ALL.len())]
    }
}
