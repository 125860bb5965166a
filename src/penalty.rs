//! Penalty builder (component D): derives the per-staffer/per-task penalty
//! table from the prefix already committed.
//!
//! Weightings are tuned so that order-of-magnitude separations keep
//! lower-tier soft constraints from ever outweighing higher-tier ones.

use crate::domain::{blocks_before, PrefixSchedule, Problem, Task};
use crate::Id;
use std::collections::HashMap;

pub const HALF_BREAK_PENALTY: f64 = 10_000.0;
pub const GEN_OBS_SWITCHING_PENALTY: f64 = 1_000.0;
pub const RMN_GEN_OBS_PENALTY: f64 = 100.0;
pub const HCA_NO_BREAK_PENALTY: f64 = 20.0;
pub const CONSECUTIVE_OBSERVATION_PENALTY: f64 = 1.0;
pub const RMN_OBSERVATION_PENALTY: f64 = 1.5;
pub const RMN_NO_BREAK_PENALTY: f64 = 0.1;

/// `penalties[(staffer, task_id)] -> cost`, built fresh for every (prefix,
/// block) pair the enumerator is about to be run against.
pub type PenaltyTable = HashMap<(Id, Id), f64>;

/// Builds the penalty table for `block` given everything committed in
/// `prefix`.
pub fn build_penalties(problem: &Problem, prefix: &PrefixSchedule, block: usize) -> PenaltyTable {
    let mut table = PenaltyTable::new();
    let tasks_here = problem.tasks_at(block);
    let prev1 = blocks_before(block, 1);
    let prev2 = blocks_before(block, 2);

    let obs_window: Vec<usize> = (1..=3)
        .filter_map(|n| blocks_before(block, n))
        .collect();

    for staffer in &problem.staffers {
        if !staffer.is_available(block) {
            continue;
        }
        let half_break = match (prev1, prev2) {
            (Some(p1), Some(p2)) => prefix.on_break_at(staffer.name(), p1) && !prefix.on_break_at(staffer.name(), p2),
            (Some(p1), None) => prefix.on_break_at(staffer.name(), p1),
            (None, _) => false,
        };

        for task in &tasks_here {
            if !task.task_valid(staffer) {
                continue;
            }
            let mut cost = task_cost(
                problem,
                prefix,
                staffer.name(),
                staffer.is_nurse(),
                task,
                block,
                prev1,
                &obs_window,
            );
            if half_break {
                cost += HALF_BREAK_PENALTY;
            }
            table.insert((staffer.name().to_string(), task.id().to_string()), cost);
        }
    }

    table
}

#[allow(clippy::too_many_arguments)]
fn task_cost(
    problem: &Problem,
    prefix: &PrefixSchedule,
    staffer: &str,
    is_nurse: bool,
    task: &Task,
    block: usize,
    prev1: Option<usize>,
    obs_window: &[usize],
) -> f64 {
    match task {
        Task::Medication { .. } => 0.0,
        Task::GeneralObservation { .. } => {
            let held_previously = prev1.is_some_and(|p1| prefix.holds_task_at(staffer, task.id(), p1));
            let shift_start = problem.config.shift_start_blocks.contains(&block);
            if held_previously || shift_start {
                if is_nurse {
                    RMN_GEN_OBS_PENALTY
                } else {
                    0.0
                }
            } else {
                GEN_OBS_SWITCHING_PENALTY
            }
        }
        Task::PatientObservation { .. } => {
            let streak = obs_window
                .iter()
                .filter(|&&b| prefix.holds_any_patient_observation(staffer, b))
                .count();
            let base = if is_nurse { RMN_OBSERVATION_PENALTY } else { 0.0 };
            if streak >= 3 {
                CONSECUTIVE_OBSERVATION_PENALTY + base
            } else {
                base
            }
        }
    }
}
