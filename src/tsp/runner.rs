//! Fixed-length evolutionary loop.
//!
//! [`TspRunner`] drives a [`TspSolver`] for `config.generations` rounds of
//! evaluate → evolve and reports progress through an observer callback.

use super::config::SolverConfig;
use super::solver::TspSolver;
use crate::error::TspError;
use crate::graph::DistanceGraph;
use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot passed to the observer after each generation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Best distance found so far.
    pub best_distance: f64,

    /// Mean distance of the evaluated population.
    pub mean_distance: f64,

    /// Number of tours in the evaluated population.
    pub population_size: usize,
}

/// Result of a TSP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspResult<C> {
    /// The best tour found during the entire run.
    pub best_tour: Vec<C>,

    /// Open-path distance of `best_tour`.
    pub best_distance: f64,

    /// Fitness of `best_tour` (`1 / best_distance`).
    pub best_fitness: f64,

    /// Number of evolve steps executed.
    pub generations: usize,

    /// Best distance after each evaluation: one entry per generation plus
    /// the final evaluation of the last offspring.
    pub distance_history: Vec<f64>,
}

/// Executes the TSP genetic algorithm.
///
/// # Usage
///
/// ```
/// use u_tsp::graph::DistanceGraph;
/// use u_tsp::tsp::{SolverConfig, TspRunner};
///
/// let graph = DistanceGraph::from_nested(vec![
///     ("A", vec![("B", 10.0), ("C", 20.0), ("D", 30.0)]),
///     ("B", vec![("A", 10.0), ("C", 40.0), ("D", 50.0)]),
///     ("C", vec![("A", 20.0), ("B", 40.0), ("D", 60.0)]),
///     ("D", vec![("A", 30.0), ("B", 50.0), ("C", 60.0)]),
/// ])
/// .unwrap();
///
/// let config = SolverConfig::default().with_generations(100).with_seed(42);
/// let result = TspRunner::run(&graph, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 4);
/// assert_eq!(result.distance_history.len(), 101);
/// ```
pub struct TspRunner;

impl TspRunner {
    /// Runs the GA for `config.generations` generations.
    ///
    /// # Errors
    /// Any error from solver construction, evaluation or evolution.
    pub fn run<C>(graph: &DistanceGraph<C>, config: &SolverConfig) -> Result<TspResult<C>, TspError>
    where
        C: Clone + Eq + Hash + Debug,
    {
        Self::run_with_observer(graph, config, |_| {})
    }

    /// Runs the GA, calling `observer` after each generation is evaluated.
    ///
    /// The observer is the progress channel: the library itself never
    /// prints.
    ///
    /// # Errors
    /// Any error from solver construction, evaluation or evolution.
    pub fn run_with_observer<C, F>(
        graph: &DistanceGraph<C>,
        config: &SolverConfig,
        mut observer: F,
    ) -> Result<TspResult<C>, TspError>
    where
        C: Clone + Eq + Hash + Debug,
        F: FnMut(&GenerationStats),
    {
        let mut solver = TspSolver::new(graph, config.clone())?;
        let mut distance_history = Vec::with_capacity(config.generations + 1);

        for gen in 0..config.generations {
            solver.evaluate()?;
            distance_history.push(solver.best_distance());

            observer(&GenerationStats {
                generation: gen + 1,
                best_distance: solver.best_distance(),
                mean_distance: solver.mean_distance().unwrap_or(f64::INFINITY),
                population_size: solver.population().len(),
            });

            solver.evolve()?;
        }

        // Score the offspring of the last evolve step.
        solver.evaluate()?;
        distance_history.push(solver.best_distance());

        let best_tour = solver.best_tour().ok_or(TspError::NotEvaluated)?;
        Ok(TspResult {
            best_tour,
            best_distance: solver.best_distance(),
            best_fitness: solver.best_fitness(),
            generations: solver.generation(),
            distance_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
