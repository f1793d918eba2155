//! GA generational loop.
//!
//! [`GeneticRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elite selection → reproduction → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use rayon::prelude::*;

use super::config::GeneticConfig;
use super::operators::{point_mutation, splice_crossover};
use super::types::{GenerationStats, ScoredCandidate};
use crate::codec::{Assignment, EncodedChoice};
use crate::cost::{Cost, CostModel};
use crate::error::Result;
use crate::queue::BoundedTopKQueue;
use crate::random::rng_from_seed;
use crate::search::{validate_people, SearchOutcome};

/// Result of a genetic search run.
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// The best encoded choice found.
    pub best: EncodedChoice,

    /// Cost of [`best`](Self::best).
    pub best_cost: Cost,

    /// [`best`](Self::best), decoded.
    pub assignment: Assignment,

    /// Number of generations evaluated, counting the initial one.
    pub generations: usize,

    /// Number of candidates decoded and scored.
    pub evaluations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Elite statistics for every evaluated generation.
    pub history: Vec<GenerationStats>,
}

impl GeneticResult {
    /// Best elite cost per generation.
    pub fn cost_history(&self) -> Vec<Cost> {
        self.history.iter().map(|s| s.best_cost).collect()
    }

    /// Converts into the strategy-independent outcome.
    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            cost: self.best_cost,
            assignment: self.assignment,
            evaluations: self.evaluations,
        }
    }
}

/// Executes the genetic search.
///
/// # Usage
///
/// ```
/// use roommate_search::cost::{CostModel, PreferenceTable};
/// use roommate_search::ga::{GeneticConfig, GeneticRunner};
///
/// let model: CostModel = PreferenceTable::new().with_weight(0, 1, -5).into();
/// let config = GeneticConfig::default()
///     .with_population_size(40)
///     .with_generations(20)
///     .with_seed(42);
/// let result = GeneticRunner::run(&model, 10, &config).unwrap();
/// assert_eq!(result.best_cost, -5);
/// ```
pub struct GeneticRunner;

impl GeneticRunner {
    /// Runs the genetic search with a generator built from `config.seed`.
    pub fn run(model: &CostModel, people: usize, config: &GeneticConfig) -> Result<GeneticResult> {
        Self::run_with_cancel(model, people, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best elite found so far.
    pub fn run_with_cancel(
        model: &CostModel,
        people: usize,
        config: &GeneticConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GeneticResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, people, config, cancel, &mut rng)
    }

    /// Runs with an injected generator and optional cancellation token.
    #[tracing::instrument(level = "debug", name = "genetic search", skip(model, config, cancel, rng))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        model: &CostModel,
        people: usize,
        config: &GeneticConfig,
        cancel: Option<Arc<AtomicBool>>,
        rng: &mut R,
    ) -> Result<GeneticResult> {
        validate_people(people)?;
        config.validate()?;

        let started = Instant::now();
        let population_size = config.population_size;
        let mut queue = BoundedTopKQueue::new(config.effective_elite_count())?;

        // 1. Initialize and evaluate
        let population: Vec<EncodedChoice> = (0..population_size)
            .map(|_| EncodedChoice::random(people, rng))
            .collect();
        let mut elites = evaluate_generation(model, population, &mut queue, config.parallel)?;
        let mut evaluations = population_size;

        let mut history = Vec::with_capacity(config.generations);
        history.push(stats(1, &elites));
        let mut best = best_of(&elites).clone();

        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        // 2. Generational loop
        for generation in 2..=config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if started.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            let population =
                next_generation(&elites, population_size, config.verbatim_elites, rng);
            elites = evaluate_generation(model, population, &mut queue, config.parallel)?;
            evaluations += population_size;

            let generation_stats = stats(generation, &elites);
            history.push(generation_stats);
            tracing::debug!(
                generation,
                best_cost = generation_stats.best_cost,
                worst_elite_cost = generation_stats.worst_elite_cost,
                "generation evaluated"
            );

            let generation_best = best_of(&elites);
            if generation_best.cost < best.cost {
                best = generation_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        tracing::info!(
            best_cost = best.cost,
            generations = history.len(),
            evaluations,
            stagnated,
            cancelled,
            timed_out,
            "genetic search finished"
        );

        let assignment = best.choice.decode();
        Ok(GeneticResult {
            best_cost: best.cost,
            best: best.choice,
            assignment,
            generations: history.len(),
            evaluations,
            stagnated,
            cancelled,
            timed_out,
            history,
        })
    }
}

/// Decodes and scores a population, then keeps its elite.
///
/// Scoring may run on the rayon pool; insertion into the queue is always
/// done by this thread. Returns the elite in ascending quality: the worst
/// elite first, the best last.
fn evaluate_generation(
    model: &CostModel,
    population: Vec<EncodedChoice>,
    queue: &mut BoundedTopKQueue<ScoredCandidate>,
    parallel: bool,
) -> Result<Vec<ScoredCandidate>> {
    if parallel {
        let scored: Vec<ScoredCandidate> = population
            .into_par_iter()
            .map(|choice| ScoredCandidate::evaluate(model, choice))
            .collect();
        for candidate in scored {
            queue.insert(candidate);
        }
    } else {
        for choice in population {
            queue.insert(ScoredCandidate::evaluate(model, choice));
        }
    }
    queue.drain_nonempty()
}

/// Builds the next population from an elite list ordered worst to best.
///
/// 1. **Elitism**: every elite is copied; all but the best `verbatim`
///    receive one point mutation
/// 2. **Crossover**: each ordered pair of distinct elites, best first,
///    yields one spliced and mutated child
/// 3. **Fill**: random elite pairs are spliced until the population is full
fn next_generation<R: Rng + ?Sized>(
    elites: &[ScoredCandidate],
    population_size: usize,
    verbatim: usize,
    rng: &mut R,
) -> Vec<EncodedChoice> {
    let ranked: Vec<&EncodedChoice> = elites.iter().rev().map(|c| &c.choice).collect();
    let k = ranked.len();
    let mut next = Vec::with_capacity(population_size);

    for (rank, elite) in ranked.iter().enumerate().take(population_size) {
        let mut child = (*elite).clone();
        if rank >= verbatim {
            point_mutation(&mut child, rng);
        }
        next.push(child);
    }

    'pairs: for (i, left) in ranked.iter().enumerate() {
        for (j, right) in ranked.iter().enumerate() {
            if i == j {
                continue;
            }
            if next.len() >= population_size {
                break 'pairs;
            }
            let mut child = splice_crossover(left, right, rng);
            point_mutation(&mut child, rng);
            next.push(child);
        }
    }

    while next.len() < population_size {
        let left = ranked[rng.random_range(0..k)];
        let right = ranked[rng.random_range(0..k)];
        let mut child = splice_crossover(left, right, rng);
        point_mutation(&mut child, rng);
        next.push(child);
    }

    next
}

fn best_of(elites: &[ScoredCandidate]) -> &ScoredCandidate {
    &elites[elites.len() - 1]
}

fn stats(generation: usize, elites: &[ScoredCandidate]) -> GenerationStats {
    GenerationStats {
        generation,
        best_cost: best_of(elites).cost,
        worst_elite_cost: elites[0].cost,
    }
}

// ============================================================================
// Tests
// ============================================================================
