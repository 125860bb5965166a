//! The fully-materialised problem description the beam driver consumes.

use crate::domain::config::ScheduleConfig;
use crate::domain::staffer::Staffer;
use crate::domain::task::{staffer_valid, Task};
use crate::error::WardSchedError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete scheduling problem: configuration, staff pool, and tasks.
///
/// Produced by the input loader, handed to the beam driver, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub config: ScheduleConfig,
    pub staffers: Vec<Staffer>,
    pub tasks: Vec<Task>,
}

impl Problem {
    /// Returns the staffers available, and valid for `task`, at `block`.
    pub fn eligible_staffers(&self, task: &Task, block: usize) -> Vec<&Staffer> {
        self.staffers
            .iter()
            .filter(|s| staffer_valid(s, task, block))
            .collect()
    }

    /// Returns the tasks active (covering) `block`.
    pub fn tasks_at(&self, block: usize) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.covers(block)).collect()
    }

    /// Validates the problem before the beam driver runs, raising
    /// `InvalidProblem` for anything that would make the hard constraints
    /// unsatisfiable by construction (as opposed to a dead end the beam
    /// search might hit at runtime).
    pub fn validate(&self) -> Result<(), WardSchedError> {
        if self.config.blocks == 0 {
            return Err(WardSchedError::invalid("schedule has zero blocks"));
        }
        if self.config.block_times.len() != self.config.blocks {
            return Err(WardSchedError::invalid(format!(
                "block_times has {} entries but blocks = {}",
                self.config.block_times.len(),
                self.config.blocks
            )));
        }
        if self.config.min_break_block > self.config.max_break_block {
            return Err(WardSchedError::invalid(format!(
                "min_break_block ({}) is after max_break_block ({})",
                self.config.min_break_block, self.config.max_break_block
            )));
        }
        if self.config.beam_width == 0 {
            return Err(WardSchedError::invalid("beam_width must be at least 1"));
        }
        for &b in &self.config.shift_start_blocks {
            if b >= self.config.blocks {
                return Err(WardSchedError::invalid(format!(
                    "shift_start_blocks contains out-of-range block {b}"
                )));
            }
        }

        let mut seen_ids = HashSet::new();
        for task in &self.tasks {
            if task.headcount() == 0 {
                return Err(WardSchedError::invalid(format!(
                    "task {} has headcount 0",
                    task.id()
                )));
            }
            if !seen_ids.insert(task.id().to_string()) && !task.is_patient_observation() {
                return Err(WardSchedError::invalid(format!(
                    "duplicate singleton task id {}",
                    task.id()
                )));
            }
            for &block in task.blocks() {
                if block >= self.config.blocks {
                    return Err(WardSchedError::invalid(format!(
                        "task {} covers out-of-range block {block}",
                        task.id()
                    )));
                }
                let available = self.eligible_staffers(task, block).len();
                if available < task.headcount() {
                    return Err(WardSchedError::invalid(format!(
                        "task {} at block {block} needs {} staffer(s) but only {available} are eligible",
                        task.id(),
                        task.headcount()
                    )));
                }
            }
        }
        Ok(())
    }
}
