//! Reporter (component F): renders a finished assignment as plain text, in
//! either a task-wise or block-wise layout. Purely presentational.

use crate::domain::{BlockAssignment, Problem, SlotKey};
use std::fmt::Write as _;

/// Layout chosen for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One section per task, one line per covered block.
    Task,
    /// One section per block, one line per task/break slot.
    Block,
}

/// Renders `assignment` against `problem` (used for block labels and task
/// descriptions) in the requested layout.
pub fn render(problem: &Problem, assignment: &BlockAssignment, format: Format) -> String {
    match format {
        Format::Task => render_task_wise(problem, assignment),
        Format::Block => render_block_wise(problem, assignment),
    }
}

fn staffer_or_unfilled(value: Option<&String>) -> &str {
    value.map(String::as_str).unwrap_or("(unfilled)")
}

fn render_task_wise(problem: &Problem, assignment: &BlockAssignment) -> String {
    let mut out = String::new();
    for task in &problem.tasks {
        let _ = writeln!(out, "{}", task.label());
        for &block in task.blocks() {
            let slot_values: Vec<&str> = (0..task.headcount())
                .map(|slot_index| {
                    let key = SlotKey::Task {
                        block,
                        task_id: task.id().to_string(),
                        slot_index,
                    };
                    staffer_or_unfilled(assignment.get(&key).and_then(Option::as_ref))
                })
                .collect();
            let _ = writeln!(
                out,
                "  {}: {}",
                problem.config.block_label(block),
                slot_values.join(", ")
            );
        }
    }
    out
}

fn render_block_wise(problem: &Problem, assignment: &BlockAssignment) -> String {
    let mut out = String::new();
    for block in 0..problem.config.blocks {
        let _ = writeln!(out, "{}", problem.config.block_label(block));
        for task in problem.tasks_at(block) {
            for slot_index in 0..task.headcount() {
                let key = SlotKey::Task {
                    block,
                    task_id: task.id().to_string(),
                    slot_index,
                };
                let _ = writeln!(
                    out,
                    "  {}: {}",
                    task.label(),
                    staffer_or_unfilled(assignment.get(&key).and_then(Option::as_ref))
                );
            }
        }
        if problem.config.breaks_active_at(block) {
            for break_index in 0..problem.config.max_on_break {
                let key = SlotKey::Break { block, break_index };
                if let Some(value) = assignment.get(&key) {
                    let _ = writeln!(out, "  break: {}", staffer_or_unfilled(value.as_ref()));
                }
            }
        }
    }
    out
}
