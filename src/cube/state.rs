//! The cube state and its quarter-turn operators.
//!
//! ## Representation
//!
//! 54 facelets as a `FaceMap<[Color; 9]>`: six faces of 9 stickers each,
//! every face read row-major from the top-left. Fixed-size arrays enforce
//! the 9-per-face / 54-total shape structurally.
//!
//! ## Move application
//!
//! Every quarter turn decomposes into two permutation steps applied as one
//! atomic update against a snapshot of the prior state:
//!
//! 1. The turning face rotates 90° in place: corner cycle (0 2 8 6), edge
//!    cycle (1 5 7 3), center fixed.
//! 2. The three border facelets on each of the four adjacent faces cycle
//!    among each other, per a fixed ring table for the turning face.
//!
//! Counter-clockwise turns walk both permutations in the opposite
//! direction, so a turn composed with its inverse is exactly the identity
//! and every turn has order 4.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::face::{Face, FaceMap};
use super::moves::{Move, MoveSeq, Turn};
use super::rng::ScrambleRng;

/// The full 54-facelet configuration, 6 faces of 9 colors each.
pub type Facelets = FaceMap<[Color; 9]>;

/// Source index of each facelet position under a 90° clockwise in-place
/// face rotation: position `i` takes the color at `CW_SOURCE[i]`.
const CW_SOURCE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Inverse of `CW_SOURCE`, for counter-clockwise rotation.
const CCW_SOURCE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// One stop on the border ring around a turning face: an adjacent face and
/// the three of its facelet indices that ride along with the turn.
type RingStop = (Face, [usize; 3]);

/// The border ring of each face, indexed by `Face::index`.
///
/// Under a clockwise turn, stop `k` receives stop `k + 1`'s facelets,
/// aligned position by position; counter-clockwise receives from `k - 1`.
/// Index triples are oriented so the positional alignment holds, which
/// makes the two directions exact inverses of each other by construction.
const RINGS: [[RingStop; 4]; 6] = [
    // Up
    [
        (Face::Front, [0, 1, 2]),
        (Face::Right, [0, 1, 2]),
        (Face::Back, [0, 1, 2]),
        (Face::Left, [0, 1, 2]),
    ],
    // Right
    [
        (Face::Up, [2, 5, 8]),
        (Face::Front, [2, 5, 8]),
        (Face::Down, [2, 5, 8]),
        (Face::Back, [6, 3, 0]),
    ],
    // Front
    [
        (Face::Up, [6, 7, 8]),
        (Face::Left, [8, 5, 2]),
        (Face::Down, [2, 1, 0]),
        (Face::Right, [0, 3, 6]),
    ],
    // Down
    [
        (Face::Front, [6, 7, 8]),
        (Face::Left, [6, 7, 8]),
        (Face::Back, [6, 7, 8]),
        (Face::Right, [6, 7, 8]),
    ],
    // Left
    [
        (Face::Up, [0, 3, 6]),
        (Face::Back, [8, 5, 2]),
        (Face::Down, [0, 3, 6]),
        (Face::Front, [0, 3, 6]),
    ],
    // Back
    [
        (Face::Up, [0, 1, 2]),
        (Face::Right, [2, 5, 8]),
        (Face::Down, [8, 7, 6]),
        (Face::Left, [6, 3, 0]),
    ],
];

/// A 3×3×3 cube state.
///
/// Plain value semantics: `Cube` is `Copy`, copies are structural and
/// independent, and there is no shared or ambient instance. Callers own
/// their cube values and pass them explicitly.
///
/// ## Example
///
/// ```
/// use twisty::cube::{Cube, Face, Move};
///
/// let mut cube = Cube::solved();
/// cube.apply(Move::clockwise(Face::Right));
/// assert!(!cube.is_solved());
///
/// cube.apply(Move::counter_clockwise(Face::Right));
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cube {
    faces: Facelets,
}

impl Cube {
    /// The canonical solved configuration: each face uniform in its
    /// designated color (up white, right red, front green, down yellow,
    /// left orange, back blue).
    #[must_use]
    pub fn solved() -> Self {
        Self {
            faces: FaceMap::new(|face| [face.solved_color(); 9]),
        }
    }

    /// Overwrite this cube with the solved configuration, unconditionally.
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    /// An independent copy of the full 54-facelet configuration.
    ///
    /// Mutating the returned value never affects this cube.
    #[must_use]
    pub fn facelets(&self) -> Facelets {
        self.faces
    }

    /// Install a full 54-facelet configuration, replacing the current one.
    ///
    /// The value is copied; later mutation of the caller's copy never
    /// affects this cube. No reachability validation is performed: any
    /// 6×9 assignment of the six colors is accepted, including ones no
    /// move sequence can produce.
    pub fn set_facelets(&mut self, facelets: Facelets) {
        self.faces = facelets;
    }

    /// The 9 facelets of one face, row-major from the top-left.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face]
    }

    /// Serialize to the 54-character facelet string.
    ///
    /// Faces are emitted in the fixed order up, right, front, down, left,
    /// back, each face row-major from index 0 to 8, one symbol per facelet
    /// from `{w, y, r, o, g, b}`. This ordering is a design contract
    /// consumed by downstream renderers and must not change.
    #[must_use]
    pub fn facelet_string(&self) -> String {
        let mut out = String::with_capacity(54);
        for (_, stickers) in self.faces.iter() {
            out.extend(stickers.iter().map(|c| c.symbol()));
        }
        out
    }

    /// Apply one quarter turn.
    ///
    /// Both permutation steps read from a snapshot of the prior state, so
    /// the update is atomic and no intermediate state is observable.
    pub fn apply(&mut self, mv: Move) {
        let prior = self.faces;

        let source = match mv.turn {
            Turn::Clockwise => &CW_SOURCE,
            Turn::CounterClockwise => &CCW_SOURCE,
        };
        for (i, &src) in source.iter().enumerate() {
            self.faces[mv.face][i] = prior[mv.face][src];
        }

        let ring = &RINGS[mv.face.index()];
        for k in 0..4 {
            let from = match mv.turn {
                Turn::Clockwise => ring[(k + 1) % 4],
                Turn::CounterClockwise => ring[(k + 3) % 4],
            };
            let (to_face, to_indices) = ring[k];
            for j in 0..3 {
                self.faces[to_face][to_indices[j]] = prior[from.0][from.1[j]];
            }
        }
    }

    /// Apply a sequence of moves in order.
    pub fn apply_all<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Apply one quarter turn by its notation symbol.
    ///
    /// The 12 canonical symbols (`U`, `U'`, ..., `B`, `B'`) are applied as
    /// usual. Any other symbol leaves the state untouched and raises no
    /// error; the return value reports whether the symbol was recognized,
    /// so callers that care about typos can check it.
    pub fn apply_symbol(&mut self, symbol: &str) -> bool {
        match Move::from_symbol(symbol) {
            Some(mv) => {
                self.apply(mv);
                true
            }
            None => false,
        }
    }

    /// Scramble with `n` moves drawn independently and uniformly from the
    /// 12-move set.
    ///
    /// Sampling is with replacement: repeats and immediate inverses are
    /// permitted, not filtered. Returns the ordered sequence applied, so a
    /// caller can display or replay it.
    pub fn scramble(&mut self, n: usize, rng: &mut ScrambleRng) -> MoveSeq {
        let mut moves = MoveSeq::with_capacity(n);
        for _ in 0..n {
            let mv = rng.pick_move();
            self.apply(mv);
            moves.push(mv);
        }
        moves
    }

    /// Whether this cube is in the canonical solved configuration.
    ///
    /// Exact structural equality against `Cube::solved()`: the same
    /// face-to-color assignment, not merely each face uniform. A cube
    /// whose faces are uniform but relabeled does not count as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.facelet_string())
    }
}
