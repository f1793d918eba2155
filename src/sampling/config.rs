//! Random sampling configuration.

use crate::error::{Error, Result};

/// Configuration for [`RandomSearch`](super::RandomSearch).
///
/// # Examples
///
/// ```
/// use roommate_search::sampling::RandomConfig;
///
/// let config = RandomConfig::default().with_iterations(500).with_seed(7);
/// assert_eq!(config.iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Number of random assignments to sample.
    pub iterations: usize,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
        }
    }
}

impl RandomConfig {
    /// Sets the number of samples.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidConfiguration(
                "iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
