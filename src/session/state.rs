//! Session state: one cube, its scramble RNG, and walkthrough navigation.

use crate::cube::{Cube, Move, MoveSeq, ScrambleRng};
use crate::solver::{ScriptedSolver, SolveStep, Walkthrough};

/// Default number of moves per scramble.
pub const DEFAULT_SCRAMBLE_LEN: usize = 20;

/// An interactive session over one cube.
///
/// Owns the cube, a deterministic scramble RNG, the most recent scramble
/// sequence, and the walkthrough of the latest solve run together with a
/// step cursor for navigating it. Everything here is explicit state; there
/// is no ambient instance.
///
/// ## Example
///
/// ```
/// use twisty::session::SessionBuilder;
///
/// let mut session = SessionBuilder::new().seed(42).build();
/// session.scramble();
/// assert!(!session.is_solved());
/// assert_eq!(session.last_scramble().len(), 20);
///
/// session.solve();
/// assert!(session.current_step().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    cube: Cube,
    rng: ScrambleRng,
    scramble_len: usize,
    last_scramble: MoveSeq,
    walkthrough: Option<Walkthrough>,
    cursor: usize,
}

/// Builder for a `Session`.
pub struct SessionBuilder {
    scramble_len: usize,
    seed: Option<u64>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            scramble_len: DEFAULT_SCRAMBLE_LEN,
            seed: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves per scramble.
    pub fn scramble_len(mut self, len: usize) -> Self {
        self.scramble_len = len;
        self
    }

    /// RNG seed, for replayable scrambles. Without one the session seeds
    /// from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session, starting from the solved cube.
    pub fn build(self) -> Session {
        let rng = match self.seed {
            Some(seed) => ScrambleRng::new(seed),
            None => ScrambleRng::from_entropy(),
        };
        Session {
            cube: Cube::solved(),
            rng,
            scramble_len: self.scramble_len,
            last_scramble: MoveSeq::new(),
            walkthrough: None,
            cursor: 0,
        }
    }
}

impl Session {
    /// A session with default configuration and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    /// The current cube state.
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Facelet string of the current cube state.
    #[must_use]
    pub fn facelet_string(&self) -> String {
        self.cube.facelet_string()
    }

    /// Whether the current cube state is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Apply one manual move to the cube.
    pub fn turn(&mut self, mv: Move) {
        self.cube.apply(mv);
    }

    /// Apply one manual move by notation symbol.
    ///
    /// Unrecognized symbols leave the cube untouched; the return value
    /// reports whether the symbol was recognized.
    pub fn turn_symbol(&mut self, symbol: &str) -> bool {
        self.cube.apply_symbol(symbol)
    }

    /// Scramble the cube by the configured length.
    ///
    /// Records the sequence for display, and discards any walkthrough and
    /// cursor position from a previous solve.
    pub fn scramble(&mut self) -> &[Move] {
        self.last_scramble = self.cube.scramble(self.scramble_len, &mut self.rng);
        self.walkthrough = None;
        self.cursor = 0;
        &self.last_scramble
    }

    /// The most recent scramble sequence, empty if none since the last
    /// reset.
    #[must_use]
    pub fn last_scramble(&self) -> &[Move] {
        &self.last_scramble
    }

    /// Reset the cube to solved and clear the scramble record, the
    /// walkthrough, and the cursor.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.last_scramble.clear();
        self.walkthrough = None;
        self.cursor = 0;
    }

    /// Run the scripted solver on a copy of the current cube.
    ///
    /// The session's cube is untouched; the recorded walkthrough is stored
    /// for navigation and the cursor moves to its first step.
    pub fn solve(&mut self) -> &Walkthrough {
        let walkthrough = ScriptedSolver::new(self.cube).solve();
        self.cursor = 0;
        self.walkthrough.insert(walkthrough)
    }

    /// The walkthrough of the latest solve run, if any.
    #[must_use]
    pub fn walkthrough(&self) -> Option<&Walkthrough> {
        self.walkthrough.as_ref()
    }

    /// Current cursor position within the walkthrough.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.cursor
    }

    /// The walkthrough step under the cursor, if a walkthrough exists.
    #[must_use]
    pub fn current_step(&self) -> Option<&SolveStep> {
        self.walkthrough.as_ref().and_then(|w| w.get(self.cursor))
    }

    /// Advance the cursor one step, clamped to the last step.
    pub fn step_forward(&mut self) {
        if let Some(w) = &self.walkthrough {
            self.cursor = (self.cursor + 1).min(w.len().saturating_sub(1));
        }
    }

    /// Move the cursor back one step, clamped to the first step.
    pub fn step_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump the cursor to the first step.
    pub fn first_step(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor to the last step.
    pub fn last_step(&mut self) {
        if let Some(w) = &self.walkthrough {
            self.cursor = w.len().saturating_sub(1);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
