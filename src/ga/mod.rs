//! Generational genetic search over Lehmer-coded choices.
//!
//! Each generation decodes and scores `P` encoded choices, keeps the best
//! `K` in a [`BoundedTopKQueue`](crate::queue::BoundedTopKQueue), and breeds
//! the next generation from that elite by elitism, pairwise crossover and
//! random fill. The best elite is always copied unchanged, so the best cost
//! never increases from one generation to the next.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: Population size, generation budget, elite sizing
//! - [`GeneticRunner`]: Executes the generational loop
//! - [`GeneticResult`]: Best choice, decoded assignment and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Point mutation and cut-and-splice crossover on encoded choices
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod types;

pub use config::GeneticConfig;
pub use runner::{GeneticResult, GeneticRunner};
pub use types::{GenerationStats, ScoredCandidate};
