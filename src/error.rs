//! Error taxonomy shared by validation, the beam driver, and the CLI.
//!
//! Both variants propagate immediately via `Result`; the core never
//! silently relaxes a hard constraint, and soft-constraint violations are
//! absorbed into the numeric score rather than raised as errors.

use crate::domain::BlockAssignment;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WardSchedError {
    /// The enumerator produced no candidate at `block` for every entry in
    /// the beam. Carries the best (lowest-score) partial schedule reached,
    /// to aid diagnosis.
    #[error("no feasible assignment at block {block} ({block_label}); best partial schedule covers blocks [0, {covered_blocks})")]
    NoFeasibleAssignment {
        block: usize,
        block_label: String,
        covered_blocks: usize,
        best_effort: BlockAssignment,
    },

    /// The problem description itself is unsatisfiable by construction
    /// (e.g. a task that can never be fully staffed, an inverted break
    /// window). Raised by the validation pre-pass before the driver runs.
    #[error("invalid problem: {reason}")]
    InvalidProblem { reason: String },
}

impl WardSchedError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        WardSchedError::InvalidProblem {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_problem_display_includes_reason() {
        let e = WardSchedError::invalid("beam_width must be at least 1");
        assert!(e.to_string().contains("beam_width must be at least 1"));
    }

    #[test]
    fn no_feasible_assignment_display_includes_block() {
        let e = WardSchedError::NoFeasibleAssignment {
            block: 4,
            block_label: "9:00".to_string(),
            covered_blocks: 4,
            best_effort: BlockAssignment::new(),
        };
        let msg = e.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains("9:00"));
    }
}
