//! Heuristic search for low-cost roommate pairings.
//!
//! Pairs `n` people into two-person rooms so that the summed pairwise
//! preference weight is as low as possible. The space of perfect matchings
//! grows as `(n-1)!!`, so the crate offers three heuristic strategies:
//!
//! - **Random sampling** ([`sampling`]): draw random matchings, keep the best.
//! - **Local swap search** ([`local`]): one greedy pass of seat swaps from a
//!   random start.
//! - **Genetic search** ([`ga`]): evolve Lehmer-coded matchings, keeping a
//!   bounded elite each generation.
//!
//! All strategies share the building blocks below:
//!
//! - [`codec`]: Lehmer encoding of matchings and its decoder.
//! - [`cost`]: Preference table and assignment scoring.
//! - [`queue`]: Fixed-capacity top-K priority queue.
//!
//! Randomness is always injected: every runner accepts any [`rand::Rng`],
//! or builds one from an optional seed via [`random`].
//!
//! # Example
//!
//! ```
//! use roommate_search::cost::{CostModel, PreferenceTable};
//! use roommate_search::local::{LocalSwapConfig, LocalSwapSearch};
//!
//! let model: CostModel = PreferenceTable::new()
//!     .with_weight(0, 1, -1)
//!     .with_weight(2, 3, 1)
//!     .into();
//! let outcome = LocalSwapSearch::run(&model, 4, &LocalSwapConfig::default().with_seed(1)).unwrap();
//! assert!(outcome.cost <= 0);
//! ```

pub mod codec;
pub mod cost;
pub mod error;
pub mod ga;
pub mod local;
pub mod queue;
pub mod random;
pub mod sampling;
pub mod search;

pub use error::{Error, Result};
pub use search::{SearchOutcome, Strategy};
