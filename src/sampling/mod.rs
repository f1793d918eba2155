//! Pure random sampling.
//!
//! Draws uniformly random [`EncodedChoice`](crate::codec::EncodedChoice)s,
//! decodes and scores each, and keeps the cheapest.

mod config;
mod runner;

pub use config::RandomConfig;
pub use runner::RandomSearch;
