//! Local swap search configuration.

use crate::error::{Error, Result};

/// Configuration for [`LocalSwapSearch`](super::LocalSwapSearch).
///
/// Each restart is one greedy pass from a fresh random assignment; the
/// cheapest pass wins. A pass costs O(n²) evaluations, so keep this small.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSwapConfig {
    /// Number of independent passes.
    pub restarts: usize,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for LocalSwapConfig {
    fn default() -> Self {
        Self {
            restarts: 1,
            seed: None,
        }
    }
}

impl LocalSwapConfig {
    /// Sets the number of passes.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(Error::InvalidConfiguration(
                "restarts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
