//! Greedy pairwise local search.
//!
//! Starting from one random assignment, every seat except the first is
//! considered once: it is trial-swapped with each later seat in another
//! room, and the last non-worsening swap is committed. One pass costs
//! O(n²) full evaluations and never increases the cost.

mod config;
mod runner;

pub use config::LocalSwapConfig;
pub use runner::LocalSwapSearch;
