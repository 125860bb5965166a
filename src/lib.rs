//! wardsched - beam-search staff allocation for a mental-health ward
//!
//! A block-wise constrained-assignment engine: for each 30-minute block of
//! the workday, enumerate feasible staff-to-task assignments, score them
//! against a history-dependent penalty table, and keep the top-K partial
//! schedules (beam search) through to the end of the day.

pub mod beam;
pub mod domain;
pub mod enumerate;
pub mod error;
pub mod input;
pub mod outcome;
pub mod penalty;
pub mod report;
pub mod scorer;

pub use beam::run;
pub use domain::{Problem, Role, ScheduleConfig, Sex, Staffer, Task};
pub use error::WardSchedError;
pub use outcome::Outcome;

/// Identifier type used for staffers, tasks, and schedule runs.
pub type Id = String;
