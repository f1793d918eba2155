//! Shared search surface.
//!
//! Every strategy returns a [`SearchOutcome`]: the best cost found and the
//! assignment achieving it. [`Strategy`] selects one of the three
//! strategies at runtime.

use rand::Rng;

use crate::codec::Assignment;
use crate::cost::{Cost, CostModel};
use crate::error::{Error, Result};
use crate::ga::{GeneticConfig, GeneticRunner};
use crate::local::{LocalSwapConfig, LocalSwapSearch};
use crate::random::rng_from_seed;
use crate::sampling::{RandomConfig, RandomSearch};

/// Best result of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cost of [`assignment`](Self::assignment).
    pub cost: Cost,

    /// The lowest-cost assignment seen.
    pub assignment: Assignment,

    /// Number of full cost evaluations performed.
    pub evaluations: usize,
}

/// A configured search strategy.
#[derive(Debug, Clone)]
pub enum Strategy {
    Random(RandomConfig),
    LocalSwap(LocalSwapConfig),
    Genetic(GeneticConfig),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random(_) => "random",
            Strategy::LocalSwap(_) => "local-swap",
            Strategy::Genetic(_) => "genetic",
        }
    }

    /// Configured seed of the wrapped strategy.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Strategy::Random(c) => c.seed,
            Strategy::LocalSwap(c) => c.seed,
            Strategy::Genetic(c) => c.seed,
        }
    }

    /// Runs the strategy with a generator built from its configured seed.
    pub fn run(&self, model: &CostModel, people: usize) -> Result<SearchOutcome> {
        let mut rng = rng_from_seed(self.seed());
        self.run_with_rng(model, people, &mut rng)
    }

    /// Runs the strategy with an injected generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        model: &CostModel,
        people: usize,
        rng: &mut R,
    ) -> Result<SearchOutcome> {
        match self {
            Strategy::Random(config) => RandomSearch::run_with_rng(model, people, config, rng),
            Strategy::LocalSwap(config) => {
                LocalSwapSearch::run_with_rng(model, people, config, rng)
            }
            Strategy::Genetic(config) => {
                GeneticRunner::run_with_rng(model, people, config, None, rng)
                    .map(|result| result.into_outcome())
            }
        }
    }
}

/// Rejects an empty problem.
pub(crate) fn validate_people(people: usize) -> Result<()> {
    if people == 0 {
        return Err(Error::InvalidConfiguration(
            "people must be at least 1".into(),
        ));
    }
    Ok(())
}
