//! Random sampling loop.

use rand::Rng;

use super::config::RandomConfig;
use crate::codec::EncodedChoice;
use crate::cost::CostModel;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::search::{validate_people, SearchOutcome};

/// Samples independent random assignments and keeps the cheapest.
///
/// No state is carried between samples besides the running best. This is
/// the baseline the other strategies are measured against.
pub struct RandomSearch;

impl RandomSearch {
    /// Runs with a generator built from `config.seed`.
    pub fn run(model: &CostModel, people: usize, config: &RandomConfig) -> Result<SearchOutcome> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, people, config, &mut rng)
    }

    /// Runs with an injected generator.
    #[tracing::instrument(level = "debug", name = "random search", skip(model, config, rng))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        model: &CostModel,
        people: usize,
        config: &RandomConfig,
        rng: &mut R,
    ) -> Result<SearchOutcome> {
        validate_people(people)?;
        config.validate()?;

        let mut best = EncodedChoice::random(people, rng).decode();
        let mut best_cost = model.score(&best);

        for i in 1..config.iterations {
            let candidate = EncodedChoice::random(people, rng).decode();
            let cost = model.score(&candidate);
            if cost < best_cost {
                best_cost = cost;
                best = candidate;
                tracing::trace!(iteration = i, cost, "random search improved");
            }
            if i % 1000 == 0 {
                tracing::debug!(iteration = i, best_cost, "random search progress");
            }
        }

        tracing::info!(
            best_cost,
            evaluations = config.iterations,
            "random search finished"
        );
        Ok(SearchOutcome {
            cost: best_cost,
            assignment: best,
            evaluations: config.iterations,
        })
    }
}
