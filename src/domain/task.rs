//! Task variants: medication windows, general observation, and patient
//! observations.
//!
//! Replaces the single-inheritance-with-virtual-predicates design of the
//! system this crate descends from with a plain sum type dispatched via
//! `match` — same semantics, no polymorphism-by-subclassing.

use crate::domain::staffer::{Role, Staffer};
use crate::Id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A schedulable task. Every variant carries the set of blocks it must be
/// covered during.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Task {
    /// A medication round: one nurse required per covered block.
    Medication { blocks: BTreeSet<usize> },
    /// Ward-wide general observation: any staffer may hold it.
    GeneralObservation { blocks: BTreeSet<usize> },
    /// A named patient's 1:1 or 2:1 observation.
    PatientObservation {
        id: Id,
        blocks: BTreeSet<usize>,
        headcount: usize,
        male_only: bool,
    },
}

/// The reserved task id used for the (singleton) medication task.
pub const MEDICATION_TASK_ID: &str = "medication";
/// The reserved task id used for the (singleton) general observation task.
pub const GENERAL_OBSERVATION_TASK_ID: &str = "general_observation";

impl Task {
    /// The task's identity for slot-key purposes. Medication and general
    /// observation are singletons in a `Problem`; patient observations are
    /// identified by patient id.
    pub fn id(&self) -> &str {
        match self {
            Task::Medication { .. } => MEDICATION_TASK_ID,
            Task::GeneralObservation { .. } => GENERAL_OBSERVATION_TASK_ID,
            Task::PatientObservation { id, .. } => id,
        }
    }

    pub fn blocks(&self) -> &BTreeSet<usize> {
        match self {
            Task::Medication { blocks } => blocks,
            Task::GeneralObservation { blocks } => blocks,
            Task::PatientObservation { blocks, .. } => blocks,
        }
    }

    pub fn covers(&self, block: usize) -> bool {
        self.blocks().contains(&block)
    }

    /// Number of simultaneous staffers required per covered block.
    pub fn headcount(&self) -> usize {
        match self {
            Task::Medication { .. } | Task::GeneralObservation { .. } => 1,
            Task::PatientObservation { headcount, .. } => *headcount,
        }
    }

    /// True iff `staffer` passes this task's role/sex predicate (ignoring
    /// availability, which is a property of the staffer+block pair).
    pub fn task_valid(&self, staffer: &Staffer) -> bool {
        match self {
            Task::Medication { .. } => staffer.role() == Role::Nurse,
            Task::GeneralObservation { .. } => true,
            Task::PatientObservation { male_only, .. } => {
                !male_only || staffer.sex() == crate::domain::staffer::Sex::Male
            }
        }
    }

    pub fn is_general_observation(&self) -> bool {
        matches!(self, Task::GeneralObservation { .. })
    }

    pub fn is_patient_observation(&self) -> bool {
        matches!(self, Task::PatientObservation { .. })
    }

    /// A human-readable label for the reporter, e.g. `"Patient A (2:1)"`.
    pub fn label(&self) -> String {
        match self {
            Task::Medication { .. } => "Medication".to_string(),
            Task::GeneralObservation { .. } => "General observation".to_string(),
            Task::PatientObservation {
                id, headcount, ..
            } => format!("Patient {id} ({headcount}:1)"),
        }
    }
}

/// `block ∈ staffer.available ∧ task_valid(task, staffer)`.
pub fn staffer_valid(staffer: &Staffer, task: &Task, block: usize) -> bool {
    staffer.is_available(block) && task.task_valid(staffer)
}
