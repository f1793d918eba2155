//! Greedy single-pass seat swapping.
//!
//! # Algorithm
//!
//! 1. Start from one assignment with cost `c`
//! 2. For each seat `i` in `1..n` (seat 0 never moves):
//!    a. Trial-swap seat `i` with every later seat `j` in a different room
//!    b. Remember the last trial whose full cost is `<= c`, lowering `c`
//!    c. Commit the remembered swap, if any
//! 3. Stop after seat `n - 1`; the pass is not repeated to a fixed point

use rand::Rng;

use super::config::LocalSwapConfig;
use crate::codec::{Assignment, EncodedChoice};
use crate::cost::CostModel;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::search::{validate_people, SearchOutcome};

/// Greedy local search over single seat swaps.
pub struct LocalSwapSearch;

impl LocalSwapSearch {
    /// Runs `config.restarts` passes with a generator built from `config.seed`.
    pub fn run(
        model: &CostModel,
        people: usize,
        config: &LocalSwapConfig,
    ) -> Result<SearchOutcome> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, people, config, &mut rng)
    }

    /// Runs `config.restarts` passes with an injected generator.
    #[tracing::instrument(level = "debug", name = "local swap search", skip(model, config, rng))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        model: &CostModel,
        people: usize,
        config: &LocalSwapConfig,
        rng: &mut R,
    ) -> Result<SearchOutcome> {
        validate_people(people)?;
        config.validate()?;

        let mut best = Self::improve(model, EncodedChoice::random(people, rng).decode());
        let mut evaluations = best.evaluations;
        tracing::debug!(restart = 0, cost = best.cost, "local swap pass finished");

        for restart in 1..config.restarts {
            let start = EncodedChoice::random(people, rng).decode();
            let pass = Self::improve(model, start);
            evaluations += pass.evaluations;
            tracing::debug!(restart, cost = pass.cost, "local swap pass finished");

            if pass.cost < best.cost {
                best = pass;
            }
        }

        best.evaluations = evaluations;
        tracing::info!(best_cost = best.cost, evaluations, "local swap search finished");
        Ok(best)
    }

    /// Runs one greedy pass from `start`.
    ///
    /// The returned cost never exceeds the cost of `start`.
    pub fn improve(model: &CostModel, start: Assignment) -> SearchOutcome {
        let mut working = start;
        let n = working.people();
        let mut best_cost = model.score(&working);
        let mut evaluations = 1;

        for i in 1..n {
            let room = Assignment::room_of_seat(i);
            let mut target = None;

            for j in (i + 1)..n {
                if Assignment::room_of_seat(j) == room {
                    continue;
                }
                working.swap_seats(i, j);
                let cost = model.score(&working);
                evaluations += 1;
                if cost <= best_cost {
                    best_cost = cost;
                    target = Some(j);
                }
                working.swap_seats(i, j);
            }

            if let Some(j) = target {
                working.swap_seats(i, j);
                tracing::trace!(seat = i, with = j, cost = best_cost, "committed swap");
            }
        }

        SearchOutcome {
            cost: best_cost,
            assignment: working,
            evaluations,
        }
    }
}
