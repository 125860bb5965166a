//! Staffer identity, role, and availability.

use crate::Id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A staff role. Only `Nurse` may administer medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Registered mental health nurse (RMN).
    Nurse,
    /// Health care assistant (HCA).
    Assistant,
}

/// A staffer's sex, used only for male-only patient observation restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// An immutable staff member: identity, role, sex, and the blocks they are
/// available to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staffer {
    name: Id,
    role: Role,
    sex: Sex,
    available: BTreeSet<usize>,
}

impl Staffer {
    pub fn new(
        name: impl Into<Id>,
        role: Role,
        sex: Sex,
        available: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            sex,
            available: available.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn available(&self) -> &BTreeSet<usize> {
        &self.available
    }

    pub fn is_available(&self, block: usize) -> bool {
        self.available.contains(&block)
    }

    pub fn is_nurse(&self) -> bool {
        self.role == Role::Nurse
    }
}
