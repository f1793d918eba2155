//! GA configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the generational loop.

use crate::error::{Error, Result};

/// Smallest elite size chosen by default.
pub const MIN_DEFAULT_ELITES: usize = 10;

/// Configuration for the genetic search.
///
/// # Defaults
///
/// ```
/// use roommate_search::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.effective_elite_count(), 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use roommate_search::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(400)
///     .with_generations(1000)
///     .with_seed(42);
/// assert_eq!(config.effective_elite_count(), 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of encoded choices evaluated per generation.
    pub population_size: usize,

    /// Number of generations to evaluate, counting the initial one.
    pub generations: usize,

    /// Number of elites kept per generation.
    ///
    /// `None` uses `max(10, floor(sqrt(population_size)))`.
    pub elite_count: Option<usize>,

    /// How many of the best elites are carried over without mutation.
    ///
    /// Lower-ranked elites receive one point mutation when copied. At least
    /// one elite must survive unchanged so the best cost never regresses.
    pub verbatim_elites: usize,

    /// Generations without improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Whether to evaluate each generation in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked between
    /// generations.
    pub time_limit_ms: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            elite_count: None,
            verbatim_elites: 2,
            stagnation_limit: 0,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Overrides the elite count.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = Some(k);
        self
    }

    /// Sets how many top elites are copied unmutated.
    pub fn with_verbatim_elites(mut self, n: usize) -> Self {
        self.verbatim_elites = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Elite count actually used by the runner.
    pub fn effective_elite_count(&self) -> usize {
        self.elite_count.unwrap_or_else(|| {
            let root = (self.population_size as f64).sqrt() as usize;
            root.max(MIN_DEFAULT_ELITES)
        })
    }

    /// Preset for quick runs on small groups.
    ///
    /// - Population: 50, Generations: 50, Stagnation limit: 20
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            generations: 50,
            stagnation_limit: 20,
            ..Self::default()
        }
    }

    /// Preset balancing quality and time.
    ///
    /// - Population: 100, Generations: 300, Stagnation limit: 50
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            generations: 300,
            stagnation_limit: 50,
            ..Self::default()
        }
    }

    /// Preset for large groups.
    ///
    /// - Population: 400 (20 elites), Generations: 1000, Stagnation limit: 100
    pub fn quality() -> Self {
        Self {
            population_size: 400,
            generations: 1000,
            stagnation_limit: 100,
            ..Self::default()
        }
    }

    /// Selects a preset from the number of people.
    ///
    /// - `people < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ people < 200` → [`balanced()`](Self::balanced)
    /// - `people ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(people: usize) -> Self {
        if people < 50 {
            Self::fast()
        } else if people < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        let elites = self.effective_elite_count();
        if elites == 0 {
            return Err(invalid("elite_count must be at least 1"));
        }
        if elites > self.population_size {
            return Err(Error::InvalidConfiguration(format!(
                "elite_count {elites} exceeds population_size {}",
                self.population_size
            )));
        }
        if self.verbatim_elites == 0 {
            return Err(invalid("verbatim_elites must be at least 1"));
        }
        if self.verbatim_elites > elites {
            return Err(Error::InvalidConfiguration(format!(
                "verbatim_elites {} exceeds elite_count {elites}",
                self.verbatim_elites
            )));
        }
        if self.time_limit_ms == Some(0) {
            return Err(invalid("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfiguration(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneticConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 100);
        assert!(config.elite_count.is_none());
        assert_eq!(config.verbatim_elites, 2);
        assert_eq!(config.stagnation_limit, 0);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneticConfig::default()
            .with_population_size(60)
            .with_generations(7)
            .with_elite_count(6)
            .with_verbatim_elites(1)
            .with_stagnation_limit(3)
            .with_parallel(false)
            .with_seed(42)
            .with_time_limit_ms(500);

        assert_eq!(config.population_size, 60);
        assert_eq!(config.generations, 7);
        assert_eq!(config.effective_elite_count(), 6);
        assert_eq!(config.verbatim_elites, 1);
        assert_eq!(config.stagnation_limit, 3);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_elite_count_formula() {
        let with = |p| GeneticConfig::default().with_population_size(p).effective_elite_count();
        assert_eq!(with(100), 10);
        assert_eq!(with(99), 10);
        assert_eq!(with(121), 11);
        assert_eq!(with(1000), 31);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GeneticConfig::default()
            .with_population_size(1)
            .with_elite_count(1)
            .with_verbatim_elites(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elites_exceed_population() {
        // Default elite count is 10, which does not fit into 8.
        let config = GeneticConfig::default().with_population_size(8);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GeneticConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_verbatim_bounds() {
        assert!(GeneticConfig::default()
            .with_verbatim_elites(0)
            .validate()
            .is_err());
        assert!(GeneticConfig::default()
            .with_verbatim_elites(11)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(GeneticConfig::default()
            .with_time_limit_ms(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_presets_are_valid() {
        for config in [
            GeneticConfig::fast(),
            GeneticConfig::balanced(),
            GeneticConfig::quality(),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
        assert_eq!(GeneticConfig::quality().effective_elite_count(), 20);
    }

    #[test]
    fn test_auto_select_boundaries() {
        assert_eq!(GeneticConfig::auto_select(49).population_size, 50);
        assert_eq!(GeneticConfig::auto_select(50).generations, 300);
        assert_eq!(GeneticConfig::auto_select(200).population_size, 400);
    }
}
