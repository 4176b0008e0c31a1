//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.mutation_rate, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals in the population, fixed across generations.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Mutation rate expressed as the denominator of a `1 / X` fraction:
    /// each individual is mutated with probability `1 / mutation_rate`.
    /// Zero disables mutation entirely.
    pub mutation_rate: u32,

    /// Fraction of the population kept as the elite set during truncation
    /// selection. Remaining slots are refilled by duplicating elites.
    pub elite_fraction: f64,

    /// Number of genes at the start of every tour excluded from crossover
    /// and mutation (the fixed starting city, conventionally city 0).
    pub start_offset: usize,

    /// Fraction of `max_generations` without improvement that triggers
    /// early termination. Zero disables stagnation-based termination.
    pub stagnation_fraction: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate individuals in parallel (requires the
    /// `parallel` feature). Operators still run on the thread that owns
    /// the RNG, so seeded runs stay deterministic.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 10,
            elite_fraction: 0.25,
            start_offset: 1,
            stagnation_fraction: 0.3,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate denominator (0 disables mutation).
    pub fn with_mutation_rate(mut self, rate: u32) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite fraction.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the fixed-prefix length.
    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    /// Sets the stagnation fraction (0 disables early termination).
    pub fn with_stagnation_fraction(mut self, fraction: f64) -> Self {
        self.stagnation_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of generations without improvement that ends the run early.
    pub fn stagnation_limit(&self) -> usize {
        (self.max_generations as f64 * self.stagnation_fraction).ceil() as usize
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before the loop starts, so malformed
    /// configurations fail before any generation runs.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size < 2 {
            return Err(TspError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(TspError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.elite_fraction <= 0.0 || self.elite_fraction > 1.0 {
            return Err(TspError::InvalidConfig(
                "elite_fraction must be in (0, 1]".into(),
            ));
        }
        Ok(())
    }
}
