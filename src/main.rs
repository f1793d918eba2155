use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roommate_search::cost::{Cost, CostModel, PreferenceTable};
use roommate_search::ga::GeneticConfig;
use roommate_search::local::LocalSwapConfig;
use roommate_search::sampling::RandomConfig;
use roommate_search::Strategy;
use std::time::Instant;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Random,
    Local,
    Genetic,
}

/// Pair people into two-person rooms with the lowest total preference cost.
#[derive(Debug, Parser)]
#[command(name = "roommates", version)]
struct Args {
    /// Number of people to place.
    #[arg(short, long, default_value_t = 1000)]
    people: usize,

    /// Samples (random), passes (local) or generations (genetic).
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,

    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Genetic)]
    strategy: StrategyKind,

    /// Genetic population size.
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// Random seed; a fresh one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print every room of the final assignment.
    #[arg(long)]
    rooms: bool,
}

/// Weight rule keyed on the last digit of `a + b`.
fn digit_rule(a: usize, b: usize) -> Cost {
    match (a + b) % 10 {
        8 => -100,
        9 => -50,
        4 => 1000,
        _ => 0,
    }
}

fn strategy(args: &Args) -> Strategy {
    match args.strategy {
        StrategyKind::Random => {
            let mut config = RandomConfig::default().with_iterations(args.iterations);
            config.seed = args.seed;
            Strategy::Random(config)
        }
        StrategyKind::Local => {
            let mut config = LocalSwapConfig::default().with_restarts(args.iterations);
            config.seed = args.seed;
            Strategy::LocalSwap(config)
        }
        StrategyKind::Genetic => {
            let mut config = GeneticConfig::default()
                .with_population_size(args.population)
                .with_generations(args.iterations);
            config.seed = args.seed;
            Strategy::Genetic(config)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let model = CostModel::new(PreferenceTable::from_fn(args.people, digit_rule));
    tracing::info!(
        people = args.people,
        weighted_pairs = model.table().len(),
        "preference table built"
    );

    let strategy = strategy(&args);
    let started = Instant::now();
    let outcome = strategy
        .run(&model, args.people)
        .with_context(|| format!("{} search failed", strategy.name()))?;
    let elapsed = started.elapsed();

    println!(
        "strategy: {}  cost: {}  evaluations: {}  time: {:.3?}",
        strategy.name(),
        outcome.cost,
        outcome.evaluations,
        elapsed
    );
    if args.rooms {
        println!("{}", outcome.assignment);
    }
    Ok(())
}
