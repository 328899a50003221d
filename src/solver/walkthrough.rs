//! Recorded walkthrough steps.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::cube::Move;

/// One recorded step of a walkthrough.
///
/// The leading entry of every walkthrough has no move; it captures the
/// starting state. Every later entry records the move applied, a
/// human-readable stage description, and the facelet string after the
/// move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStep {
    /// The move applied, or `None` for the leading start-state entry.
    pub mv: Option<Move>,
    /// Which stage of the script this step belongs to.
    pub description: String,
    /// Facelet string of the cube after this step.
    pub facelets: String,
}

/// The ordered step list produced by one solver run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walkthrough {
    steps: Vec<SolveStep>,
}

impl Walkthrough {
    pub(crate) fn new(steps: Vec<SolveStep>) -> Self {
        Self { steps }
    }

    /// Number of recorded steps, including the leading start entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get a step by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SolveStep> {
        self.steps.get(index)
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> impl Iterator<Item = &SolveStep> {
        self.steps.iter()
    }
}

impl Index<usize> for Walkthrough {
    type Output = SolveStep;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Walkthrough {
    type Item = &'a SolveStep;
    type IntoIter = std::slice::Iter<'a, SolveStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
