//! Candidate scorer (component C): turns a block's penalty table into a
//! single delta score for one enumerated candidate.
//!
//! Kept separate from the penalty builder so the beam driver can score many
//! candidates against one table without recomputing it each time.

use crate::domain::{BlockAssignment, Role, Staffer};
use crate::penalty::{PenaltyTable, HCA_NO_BREAK_PENALTY, RMN_NO_BREAK_PENALTY};

/// Scores one block candidate: sum of task-assignment costs from `penalties`,
/// less a reward for every staffer sent on break.
pub fn score_candidate(candidate: &BlockAssignment, penalties: &PenaltyTable, staffers: &[Staffer]) -> f64 {
    let mut total = 0.0;
    for (key, value) in candidate {
        let Some(name) = value else { continue };
        if key.is_break() {
            let role = staffers.iter().find(|s| s.name() == name).map(Staffer::role);
            total -= match role {
                Some(Role::Nurse) => RMN_NO_BREAK_PENALTY,
                _ => HCA_NO_BREAK_PENALTY,
            };
        } else if let Some(task_id) = key.task_id() {
            if let Some(cost) = penalties.get(&(name.clone(), task_id.to_string())) {
                total += cost;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Sex, SlotKey};

    fn staffers() -> Vec<Staffer> {
        vec![
            Staffer::new("Lily", Role::Nurse, Sex::Female, [0]),
            Staffer::new("Bob", Role::Assistant, Sex::Male, [0]),
        ]
    }

    #[test]
    fn task_slot_cost_is_looked_up_by_staffer_and_task() {
        let mut candidate = BlockAssignment::new();
        candidate.insert(
            SlotKey::Task {
                block: 0,
                task_id: "medication".to_string(),
                slot_index: 0,
            },
            Some("Lily".to_string()),
        );
        let mut penalties = PenaltyTable::new();
        penalties.insert(("Lily".to_string(), "medication".to_string()), 3.5);
        assert_eq!(score_candidate(&candidate, &penalties, &staffers()), 3.5);
    }

    #[test]
    fn nurse_break_subtracts_nurse_reward() {
        let mut candidate = BlockAssignment::new();
        candidate.insert(
            SlotKey::Break {
                block: 0,
                break_index: 0,
            },
            Some("Lily".to_string()),
        );
        let penalties = PenaltyTable::new();
        assert_eq!(
            score_candidate(&candidate, &penalties, &staffers()),
            -RMN_NO_BREAK_PENALTY
        );
    }

    #[test]
    fn assistant_break_subtracts_assistant_reward() {
        let mut candidate = BlockAssignment::new();
        candidate.insert(
            SlotKey::Break {
                block: 0,
                break_index: 0,
            },
            Some("Bob".to_string()),
        );
        let penalties = PenaltyTable::new();
        assert_eq!(
            score_candidate(&candidate, &penalties, &staffers()),
            -HCA_NO_BREAK_PENALTY
        );
    }

    #[test]
    fn empty_break_slot_contributes_nothing() {
        let mut candidate = BlockAssignment::new();
        candidate.insert(
            SlotKey::Break {
                block: 0,
                break_index: 0,
            },
            None,
        );
        let penalties = PenaltyTable::new();
        assert_eq!(score_candidate(&candidate, &penalties, &staffers()), 0.0);
    }

    #[test]
    fn unlisted_task_assignment_costs_nothing() {
        let mut candidate = BlockAssignment::new();
        candidate.insert(
            SlotKey::Task {
                block: 0,
                task_id: "general_observation".to_string(),
                slot_index: 0,
            },
            Some("Bob".to_string()),
        );
        let penalties = PenaltyTable::new();
        assert_eq!(score_candidate(&candidate, &penalties, &staffers()), 0.0);
    }
}
