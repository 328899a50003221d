//! The scripted beginner-method walkthrough.
//!
//! This is explicitly not an adaptive solver: it replays a fixed
//! seven-stage script of canonical beginner-method algorithms regardless
//! of the scrambled state, recording each move with a stage description
//! and the resulting facelet string. Its value is the step-by-step
//! narration, not a guarantee of reaching the solved state.

use crate::cube::{Cube, Face, Move, Turn};

use super::walkthrough::{SolveStep, Walkthrough};

const fn cw(face: Face) -> Move {
    Move::new(face, Turn::Clockwise)
}

const fn ccw(face: Face) -> Move {
    Move::new(face, Turn::CounterClockwise)
}

use Face::{Front as F, Left as L, Right as R, Up as U};

/// F R U R' U' F'
const CROSS: [Move; 6] = [cw(F), cw(R), cw(U), ccw(R), ccw(U), ccw(F)];

/// R U R' U'
const CORNER_INSERT: [Move; 4] = [cw(R), cw(U), ccw(R), ccw(U)];

/// U R U' R' U' F' U F
const RIGHT_HAND: [Move; 8] = [
    cw(U),
    cw(R),
    ccw(U),
    ccw(R),
    ccw(U),
    ccw(F),
    cw(U),
    cw(F),
];

/// U' L' U L U F U' F'
const LEFT_HAND: [Move; 8] = [
    ccw(U),
    ccw(L),
    cw(U),
    cw(L),
    cw(U),
    cw(F),
    ccw(U),
    ccw(F),
];

/// Sune: R U R' U R U U R'
const SUNE: [Move; 8] = [cw(R), cw(U), ccw(R), cw(U), cw(R), cw(U), cw(U), ccw(R)];

/// R U R' F' R U R' U' R' F R R U' R' U'
const CORNER_PERMUTE: [Move; 15] = [
    cw(R),
    cw(U),
    ccw(R),
    ccw(F),
    cw(R),
    cw(U),
    ccw(R),
    ccw(U),
    ccw(R),
    cw(F),
    cw(R),
    cw(R),
    ccw(U),
    ccw(R),
    ccw(U),
];

/// R R U R U R' U R' U R' U R'
const EDGE_PERMUTE: [Move; 12] = [
    cw(R),
    cw(R),
    cw(U),
    cw(R),
    cw(U),
    ccw(R),
    cw(U),
    ccw(R),
    cw(U),
    ccw(R),
    cw(U),
    ccw(R),
];

/// Total moves in one full script run.
///
/// Cross (6) + corners (4x4) + middle layer (8+8) + yellow cross (3x6)
/// + corner orientation (4x8 + 3 top turns) + corner permutation (15)
/// + edge permutation (12).
pub const SCRIPT_MOVE_COUNT: usize = 118;

/// Runs the fixed beginner-method script over one cube, recording every
/// move as a walkthrough step.
///
/// The solver owns its cube; pass a copy if the original must stay
/// untouched.
///
/// ## Example
///
/// ```
/// use twisty::cube::Cube;
/// use twisty::solver::ScriptedSolver;
///
/// let walkthrough = ScriptedSolver::new(Cube::solved()).solve();
/// assert_eq!(walkthrough.len(), 119); // leading entry + 118 moves
/// assert_eq!(walkthrough[0].mv, None);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSolver {
    cube: Cube,
    steps: Vec<SolveStep>,
}

impl ScriptedSolver {
    /// Create a solver over the given starting state.
    #[must_use]
    pub fn new(cube: Cube) -> Self {
        Self {
            cube,
            steps: Vec::with_capacity(SCRIPT_MOVE_COUNT + 1),
        }
    }

    /// Run the full script and return the recorded walkthrough.
    #[must_use]
    pub fn solve(mut self) -> Walkthrough {
        self.steps.push(SolveStep {
            mv: None,
            description: "Initial scramble state".to_string(),
            facelets: self.cube.facelet_string(),
        });

        self.white_cross();
        self.white_corners();
        self.middle_layer();
        self.yellow_cross();
        self.orient_yellow_corners();
        self.permute_yellow_corners();
        self.permute_yellow_edges();

        Walkthrough::new(self.steps)
    }

    fn record(&mut self, mv: Move, description: &str) {
        self.cube.apply(mv);
        self.steps.push(SolveStep {
            mv: Some(mv),
            description: description.to_string(),
            facelets: self.cube.facelet_string(),
        });
    }

    fn run(&mut self, algorithm: &[Move], description: &str) {
        for &mv in algorithm {
            self.record(mv, description);
        }
    }

    fn white_cross(&mut self) {
        self.run(&CROSS, "White cross formation");
    }

    fn white_corners(&mut self) {
        for i in 1..=4 {
            self.run(&CORNER_INSERT, &format!("Positioning white corner {i}"));
        }
    }

    fn middle_layer(&mut self) {
        self.run(&RIGHT_HAND, "Middle layer - right hand algorithm");
        self.run(&LEFT_HAND, "Middle layer - left hand algorithm");
    }

    fn yellow_cross(&mut self) {
        for i in 1..=3 {
            self.run(&CROSS, &format!("Yellow cross formation - pass {i}"));
        }
    }

    fn orient_yellow_corners(&mut self) {
        for i in 1..=4 {
            self.run(&SUNE, &format!("Orienting yellow corners - position {i}"));
            if i < 4 {
                self.record(cw(U), "Rotating top layer");
            }
        }
    }

    fn permute_yellow_corners(&mut self) {
        self.run(&CORNER_PERMUTE, "Permuting yellow corners");
    }

    fn permute_yellow_edges(&mut self) {
        self.run(&EDGE_PERMUTE, "Permuting yellow edges - final steps");
    }
}
