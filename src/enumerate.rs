//! Candidate enumerator (component B): for one block, enumerate every
//! assignment of staff to task and break slots that satisfies the hard
//! constraints.
//!
//! A backtracking CSP solver with forward-checking. Domain sizes in scope
//! are small (at most a few dozen staff, at most a handful of slots per
//! block) so full enumeration per block is tractable.

use crate::domain::{blocks_before, BlockAssignment, PrefixSchedule, Problem, SlotKey};
use crate::Id;
use std::collections::HashSet;

struct Variable {
    key: SlotKey,
    domain: Vec<Option<Id>>,
}

/// Enumerates every hard-constraint-satisfying candidate for `block`, given
/// the committed `prefix`. Returns an empty vector if no candidate exists.
pub fn enumerate_block(problem: &Problem, prefix: &PrefixSchedule, block: usize) -> Vec<BlockAssignment> {
    let tasks_here = problem.tasks_at(block);
    let breaks_here = problem.config.breaks_active_at(block);

    // Staff who must continue an unfinished break (I5) are bound before the
    // free-variable search runs: continuation is a hard *must*, not a
    // domain option left for backtracking to discover.
    let mut forced = BlockAssignment::new();
    let mut bound_names: HashSet<Id> = HashSet::new();

    if breaks_here {
        let prev1 = blocks_before(block, 1);
        let prev2 = blocks_before(block, 2);
        let mut continuing: Vec<Id> = problem
            .staffers
            .iter()
            .filter(|s| s.is_available(block))
            .filter(|s| prev1.is_some_and(|p1| prefix.on_break_at(s.name(), p1)))
            .filter(|s| match prev2 {
                Some(p2) => !prefix.on_break_at(s.name(), p2),
                None => true,
            })
            .map(|s| s.name().to_string())
            .collect();
        continuing.sort();

        if continuing.len() > problem.config.max_on_break {
            return Vec::new();
        }
        for (i, name) in continuing.into_iter().enumerate() {
            bound_names.insert(name.clone());
            forced.insert(
                SlotKey::Break {
                    block,
                    break_index: i,
                },
                Some(name),
            );
        }
    }

    let mut variables = Vec::new();

    for task in &tasks_here {
        let eligible: Vec<Id> = problem
            .eligible_staffers(task, block)
            .into_iter()
            .map(|s| s.name().to_string())
            .filter(|n| !bound_names.contains(n))
            .collect();
        for slot_index in 0..task.headcount() {
            variables.push(Variable {
                key: SlotKey::Task {
                    block,
                    task_id: task.id().to_string(),
                    slot_index,
                },
                domain: eligible.iter().cloned().map(Some).collect(),
            });
        }
    }

    if breaks_here {
        let overflow = !problem.config.is_inside_break_window(block);
        let prev1 = blocks_before(block, 1);
        for break_index in forced.len()..problem.config.max_on_break {
            let domain = if overflow {
                // The trailing continuation block admits no new breaks;
                // every genuine continuer was already bound above.
                vec![None]
            } else {
                let already_broken: HashSet<Id> = problem
                    .staffers
                    .iter()
                    .filter(|s| {
                        prefix
                            .break_blocks(s.name())
                            .iter()
                            .any(|&b2| b2 < block && Some(b2) != prev1)
                    })
                    .map(|s| s.name().to_string())
                    .collect();
                let mut dom: Vec<Option<Id>> = problem
                    .staffers
                    .iter()
                    .filter(|s| s.is_available(block))
                    .map(|s| s.name().to_string())
                    .filter(|n| !bound_names.contains(n) && !already_broken.contains(n))
                    .map(Some)
                    .collect();
                dom.push(None);
                dom
            };
            variables.push(Variable {
                key: SlotKey::Break { block, break_index },
                domain,
            });
        }
    }

    // Restrictive task slots (small domains) first, general/other
    // observation next, break slots last.
    variables.sort_by_key(|v| (v.key.is_break(), v.domain.len()));

    let mut results = Vec::new();
    let mut used: HashSet<Id> = bound_names;
    let mut current = forced;
    backtrack(&variables, 0, &mut used, &mut current, &mut results);
    results
}

fn backtrack(
    vars: &[Variable],
    idx: usize,
    used: &mut HashSet<Id>,
    current: &mut BlockAssignment,
    results: &mut Vec<BlockAssignment>,
) {
    if idx == vars.len() {
        results.push(current.clone());
        return;
    }
    let var = &vars[idx];
    for value in &var.domain {
        match value {
            Some(name) => {
                if used.contains(name) {
                    continue;
                }
                used.insert(name.clone());
                current.insert(var.key.clone(), Some(name.clone()));
                backtrack(vars, idx + 1, used, current, results);
                current.remove(&var.key);
                used.remove(name);
            }
            None => {
                current.insert(var.key.clone(), None);
                backtrack(vars, idx + 1, used, current, results);
                current.remove(&var.key);
            }
        }
    }
}
