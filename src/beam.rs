//! Beam driver (component E): walks the blocks in order, enumerating and
//! scoring candidates at each one and keeping only the best `beam_width`
//! partial schedules.
//!
//! Ties within a block are broken by a seeded shuffle before the stable
//! sort-and-truncate, so two runs with the same seed pick the same winners
//! even when many candidates share a score.

use crate::domain::{PrefixSchedule, Problem};
use crate::enumerate::enumerate_block;
use crate::error::WardSchedError;
use crate::outcome::Outcome;
use crate::penalty::build_penalties;
use crate::scorer::score_candidate;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Runs the beam search to completion, returning the lowest-scoring full-day
/// schedule found, or `NoFeasibleAssignment` if some block admits no
/// candidate for every entry currently in the beam.
pub fn run(problem: &Problem) -> Result<Outcome, WardSchedError> {
    problem.validate()?;

    let mut rng = Pcg32::seed_from_u64(problem.config.random_seed);
    let mut beam: Vec<PrefixSchedule> = vec![PrefixSchedule::empty()];

    for block in 0..problem.config.blocks {
        let mut next_beam: Vec<PrefixSchedule> = Vec::new();

        for prefix in &beam {
            let penalties = build_penalties(problem, prefix, block);
            for candidate in enumerate_block(problem, prefix, block) {
                let delta = score_candidate(&candidate, &penalties, &problem.staffers);
                next_beam.push(prefix.extend(candidate, delta));
            }
        }

        if next_beam.is_empty() {
            let best_effort = beam
                .iter()
                .min_by(|a, b| a.score().partial_cmp(&b.score()).unwrap())
                .cloned()
                .unwrap_or_default();
            return Err(WardSchedError::NoFeasibleAssignment {
                block,
                block_label: problem.config.block_label(block).to_string(),
                covered_blocks: block,
                best_effort: best_effort.assignments().clone(),
            });
        }

        next_beam.shuffle(&mut rng);
        next_beam.sort_by(|a, b| a.score().partial_cmp(&b.score()).unwrap());
        next_beam.truncate(problem.config.beam_width);
        beam = next_beam;
    }

    let best = beam
        .into_iter()
        .min_by(|a, b| a.score().partial_cmp(&b.score()).unwrap())
        .expect("beam is never emptied without returning early");
    Ok(Outcome::new(best.assignments().clone(), best.score()))
}
