//! Schedule configuration: block count, labels, break window, and
//! beam-search parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Static configuration for a scheduling run, supplied alongside the
/// staffers and tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Number of 30-minute blocks in the workday, indexed `[0, blocks)`.
    pub blocks: usize,
    /// Display label for each block, opaque to the core (used by the
    /// reporter and in diagnostics only).
    pub block_times: Vec<String>,
    /// Inclusive lower bound of the break-eligible window.
    pub min_break_block: usize,
    /// Inclusive upper bound of the break-eligible window. A break may
    /// extend one block past this to finish its second half.
    pub max_break_block: usize,
    /// Maximum number of staff simultaneously on break.
    pub max_on_break: usize,
    /// Block indices at which a new shift starts — admissible points to
    /// hand over the general-observation holder without penalty.
    pub shift_start_blocks: BTreeSet<usize>,
    /// Beam width (K): number of partial schedules retained per block.
    pub beam_width: usize,
    /// Seed for the tie-breaking random generator, for reproducible runs.
    pub random_seed: u64,
}

impl ScheduleConfig {
    /// The trailing break-continuation block, one past the break window.
    pub fn break_overflow_block(&self) -> usize {
        self.max_break_block + 1
    }

    /// True iff `block` may carry break slots (inside the window or the
    /// single trailing continuation block).
    pub fn breaks_active_at(&self, block: usize) -> bool {
        block >= self.min_break_block && block <= self.break_overflow_block()
    }

    /// True iff `block` is strictly inside the break window (i.e. new
    /// breaks may start here, as opposed to only continuing).
    pub fn is_inside_break_window(&self, block: usize) -> bool {
        block >= self.min_break_block && block <= self.max_break_block
    }

    pub fn block_label(&self, block: usize) -> &str {
        self.block_times
            .get(block)
            .map(String::as_str)
            .unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScheduleConfig {
        ScheduleConfig {
            blocks: 10,
            block_times: (0..10).map(|b| format!("t{b}")).collect(),
            min_break_block: 3,
            max_break_block: 6,
            max_on_break: 2,
            shift_start_blocks: [0].into_iter().collect(),
            beam_width: 4,
            random_seed: 1,
        }
    }

    #[test]
    fn break_overflow_is_one_past_window() {
        let c = config();
        assert_eq!(c.break_overflow_block(), 7);
    }

    #[test]
    fn breaks_active_covers_window_and_overflow() {
        let c = config();
        assert!(!c.breaks_active_at(2));
        assert!(c.breaks_active_at(3));
        assert!(c.breaks_active_at(6));
        assert!(c.breaks_active_at(7));
        assert!(!c.breaks_active_at(8));
    }

    #[test]
    fn inside_window_excludes_overflow_block() {
        let c = config();
        assert!(c.is_inside_break_window(6));
        assert!(!c.is_inside_break_window(7));
    }
}
