//! The result of a completed beam search run.

use crate::domain::BlockAssignment;
use serde::{Deserialize, Serialize};

/// A full-day schedule produced by the beam driver, together with its
/// cumulative penalty score (lower is better).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub assignment: BlockAssignment,
    pub score: f64,
}

impl Outcome {
    pub fn new(assignment: BlockAssignment, score: f64) -> Self {
        Self { assignment, score }
    }
}
