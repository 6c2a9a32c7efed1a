//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{GaError, Result};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_generations(500)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](GaConfig::validate) rather than silently clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of tours per generation. Constant across the run.
    pub population_size: usize,

    /// Number of breeding iterations after the initial population.
    ///
    /// Zero is valid: the result is the best of the initial population.
    pub generations: usize,

    /// Per-position probability of a swap during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of distinct individuals drawn per tournament.
    pub tournament_size: usize,

    /// A progress event is emitted after every generation whose index is a
    /// multiple of this value.
    pub report_interval: usize,

    /// Build offspring on rayon worker threads.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical to the sequential path for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            mutation_rate: 0.01,
            tournament_size: 3,
            report_interval: 20,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
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

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the progress reporting interval, in generations.
    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    /// Enables or disables parallel offspring construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        validate_rate(self.mutation_rate)?;
        if self.tournament_size == 0 {
            return Err(GaError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if self.population_size < self.tournament_size {
            return Err(GaError::InvalidConfig(format!(
                "population_size ({}) is smaller than tournament_size ({})",
                self.population_size, self.tournament_size
            )));
        }
        if self.report_interval == 0 {
            return Err(GaError::InvalidConfig(
                "report_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Checks a probability lies in `[0, 1]`. NaN is rejected.
pub(crate) fn validate_rate(rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(GaError::InvalidConfig(format!(
            "mutation_rate must be within [0, 1], got {rate}"
        )))
    }
}
