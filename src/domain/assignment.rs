//! Assignment containers: one block's worth of slot values, and the
//! cumulative prefix schedule the beam driver threads through the blocks.

use crate::domain::slot::SlotKey;
use crate::Id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One block's slot values: task slots always hold `Some(staffer)`, break
/// slots may hold `None`.
pub type BlockAssignment = BTreeMap<SlotKey, Option<Id>>;

/// The assignments committed for all blocks processed so far, plus the
/// cumulative score. Immutable once built for a block — extended
/// functionally via [`PrefixSchedule::extend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixSchedule {
    assignments: BlockAssignment,
    score: f64,
}

impl PrefixSchedule {
    /// The empty prefix schedule for block 0, with no history.
    pub fn empty() -> Self {
        Self {
            assignments: BlockAssignment::new(),
            score: 0.0,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// The full assignment accumulated so far (or, at the end of a run,
    /// the complete schedule).
    pub fn assignments(&self) -> &BlockAssignment {
        &self.assignments
    }

    /// Returns a new prefix with `additions` merged in and `delta` added to
    /// the cumulative score.
    pub fn extend(&self, additions: BlockAssignment, delta: f64) -> Self {
        let mut assignments = self.assignments.clone();
        assignments.extend(additions);
        Self {
            assignments,
            score: self.score + delta,
        }
    }

    /// Iterates over `(slot, value)` pairs for one block.
    pub fn slots_in_block(&self, block: usize) -> impl Iterator<Item = (&SlotKey, &Option<Id>)> {
        self.assignments
            .iter()
            .filter(move |(k, _)| k.block() == block)
    }

    /// True iff `staffer` occupies a break slot at `block`.
    pub fn on_break_at(&self, staffer: &str, block: usize) -> bool {
        self.slots_in_block(block)
            .any(|(k, v)| k.is_break() && v.as_deref() == Some(staffer))
    }

    /// True iff `staffer` occupies the named task's slot at `block`.
    pub fn holds_task_at(&self, staffer: &str, task_id: &str, block: usize) -> bool {
        self.slots_in_block(block)
            .any(|(k, v)| k.task_id() == Some(task_id) && v.as_deref() == Some(staffer))
    }

    /// True iff `staffer` occupies any non-break task slot at `block`.
    pub fn holds_any_task_at(&self, staffer: &str, block: usize) -> bool {
        self.slots_in_block(block)
            .any(|(k, v)| !k.is_break() && v.as_deref() == Some(staffer))
    }

    /// True iff `staffer` occupies a patient observation slot (i.e. a task
    /// slot that is neither medication nor general observation) at `block`.
    pub fn holds_any_patient_observation(&self, staffer: &str, block: usize) -> bool {
        use crate::domain::task::{GENERAL_OBSERVATION_TASK_ID, MEDICATION_TASK_ID};
        self.slots_in_block(block).any(|(k, v)| {
            v.as_deref() == Some(staffer)
                && matches!(
                    k.task_id(),
                    Some(id) if id != MEDICATION_TASK_ID && id != GENERAL_OBSERVATION_TASK_ID
                )
        })
    }

    /// All blocks at which `staffer` was assigned a break.
    pub fn break_blocks(&self, staffer: &str) -> Vec<usize> {
        self.assignments
            .iter()
            .filter_map(|(k, v)| match (k, v.as_deref()) {
                (SlotKey::Break { block, .. }, Some(s)) if s == staffer => Some(*block),
                _ => None,
            })
            .collect()
    }
}

impl Default for PrefixSchedule {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_slot(block: usize, task_id: &str, staffer: Option<&str>) -> (SlotKey, Option<Id>) {
        (
            SlotKey::Task {
                block,
                task_id: task_id.to_string(),
                slot_index: 0,
            },
            staffer.map(str::to_string),
        )
    }

    fn break_slot(block: usize, idx: usize, staffer: Option<&str>) -> (SlotKey, Option<Id>) {
        (
            SlotKey::Break {
                block,
                break_index: idx,
            },
            staffer.map(str::to_string),
        )
    }

    #[test]
    fn empty_prefix_has_zero_score_and_no_assignments() {
        let p = PrefixSchedule::empty();
        assert_eq!(p.score(), 0.0);
        assert!(p.assignments().is_empty());
    }

    #[test]
    fn extend_merges_and_accumulates_score() {
        let p = PrefixSchedule::empty();
        let mut block0 = BlockAssignment::new();
        let (k, v) = task_slot(0, "general_observation", Some("Bob"));
        block0.insert(k, v);
        let p1 = p.extend(block0, 1.5);
        assert_eq!(p1.score(), 1.5);
        assert!(p1.holds_task_at("Bob", "general_observation", 0));

        let mut block1 = BlockAssignment::new();
        let (k, v) = task_slot(1, "general_observation", Some("Bob"));
        block1.insert(k, v);
        let p2 = p1.extend(block1, 0.5);
        assert_eq!(p2.score(), 2.0);
        assert!(p2.holds_task_at("Bob", "general_observation", 0));
        assert!(p2.holds_task_at("Bob", "general_observation", 1));
    }

    #[test]
    fn on_break_at_detects_break_slot_occupant() {
        let p = PrefixSchedule::empty();
        let mut block = BlockAssignment::new();
        let (k, v) = break_slot(2, 0, Some("Sally"));
        block.insert(k, v);
        let p = p.extend(block, 0.0);
        assert!(p.on_break_at("Sally", 2));
        assert!(!p.on_break_at("Sally", 3));
        assert!(!p.on_break_at("Bob", 2));
    }

    #[test]
    fn break_blocks_collects_all_blocks_for_staffer() {
        let p = PrefixSchedule::empty();
        let mut b1 = BlockAssignment::new();
        let (k, v) = break_slot(1, 0, Some("Sally"));
        b1.insert(k, v);
        let mut b2 = BlockAssignment::new();
        let (k, v) = break_slot(2, 0, Some("Sally"));
        b2.insert(k, v);
        let p = p.extend(b1, 0.0).extend(b2, 0.0);
        assert_eq!(p.break_blocks("Sally"), vec![1, 2]);
    }

    #[test]
    fn holds_any_task_at_ignores_breaks() {
        let p = PrefixSchedule::empty();
        let mut block = BlockAssignment::new();
        let (k, v) = break_slot(1, 0, Some("Sally"));
        block.insert(k, v);
        let p = p.extend(block, 0.0);
        assert!(!p.holds_any_task_at("Sally", 1));
    }
}
