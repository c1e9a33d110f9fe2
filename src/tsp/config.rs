//! Solver configuration.
//!
//! [`SolverConfig`] holds every parameter that controls the evolutionary loop.

use crate::error::TspError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitness assigned to a tour whose total distance is zero.
///
/// Fitness is `1 / distance`, so a zero-length tour has no finite fitness.
/// This only happens when the graph holds zero-distance edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroDistancePolicy {
    /// Fail with [`TspError::DegenerateFitness`].
    #[default]
    Reject,

    /// Use the given value as the fitness of a zero-length tour.
    ///
    /// The value is used as is. A ceiling below the fitness of real tours
    /// ranks zero-length tours below them.
    Ceiling(f64),
}

/// How `evolve()` sizes the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PopulationSizing {
    /// Every generation has exactly `population_size` tours, the elite
    /// included.
    #[default]
    Normalized,

    /// Offspring are appended until the generation (elite included) holds
    /// `population_size - 1` tours, so each generation after the first is
    /// one tour short, with or without elitism.
    Legacy,
}

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::tsp::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.generations, 1000);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::tsp::{PopulationSizing, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.05)
///     .with_elitism(false)
///     .with_sizing(PopulationSizing::Legacy)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Number of tours in the population. At least 2.
    pub population_size: usize,

    /// Per-position swap probability during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether the best-known tour is carried unchanged into every
    /// new generation.
    pub elitism: bool,

    /// Number of evaluate/evolve rounds performed by [`TspRunner`](super::TspRunner).
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to compute fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to the sequential path.
    pub parallel: bool,

    /// Handling of zero-length tours.
    pub zero_distance: ZeroDistancePolicy,

    /// Size of generations produced by `evolve()`.
    pub sizing: PopulationSizing,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            mutation_rate: 0.01,
            elitism: true,
            generations: 1000,
            seed: None,
            parallel: false,
            zero_distance: ZeroDistancePolicy::default(),
            sizing: PopulationSizing::default(),
        }
    }
}

impl SolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate, clamped to 0.0–1.0.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the zero-distance policy.
    pub fn with_zero_distance(mut self, policy: ZeroDistancePolicy) -> Self {
        self.zero_distance = policy;
        self
    }

    /// Sets the generation sizing rule.
    pub fn with_sizing(mut self, sizing: PopulationSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.population_size < 2 {
            return Err(TspError::Config(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::Config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if let ZeroDistancePolicy::Ceiling(c) = self.zero_distance {
            if !c.is_finite() || c <= 0.0 {
                return Err(TspError::Config(format!(
                    "zero-distance fitness ceiling must be positive and finite, got {c}"
                )));
            }
        }
        Ok(())
    }
}
