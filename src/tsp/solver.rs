//! The evolutionary TSP solver.
//!
//! [`TspSolver`] owns the population, the parameters and the best tour
//! found so far. The caller drives it:
//!
//! ```text
//! new (random population) -> { evaluate -> evolve } x N -> best_tour
//! ```
//!
//! [`TspRunner`](super::TspRunner) packages that loop.

use super::config::SolverConfig;
use super::fitness::{fitness_from_distance, tour_distance, MissingEdge};
use super::{operators, selection};
use crate::error::TspError;
use crate::graph::{DistanceGraph, DistanceMatrix};
use crate::random::{create_rng, random_permutation};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The best tour observed across all evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTour {
    tour: Vec<usize>,
    fitness: f64,
}

impl BestTour {
    /// The tour as city indices.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Fitness of the tour (`1 / distance`).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Distance of the tour, derived from its fitness.
    pub fn distance(&self) -> f64 {
        1.0 / self.fitness
    }
}

/// Genetic-algorithm solver for the open-path TSP.
///
/// Tours are stored as permutations of city indices; index `i` names
/// `cities()[i]`. Conversions to city labels happen only at the public
/// boundary ([`best_tour`](Self::best_tour), [`tours`](Self::tours)).
///
/// # Examples
///
/// ```
/// use u_tsp::graph::DistanceGraph;
/// use u_tsp::tsp::{SolverConfig, TspSolver};
///
/// let mut graph = DistanceGraph::new();
/// graph.insert_symmetric("A", "B", 10.0).unwrap();
/// graph.insert_symmetric("A", "C", 20.0).unwrap();
/// graph.insert_symmetric("B", "C", 40.0).unwrap();
///
/// let config = SolverConfig::default().with_population_size(20).with_seed(1);
/// let mut solver = TspSolver::new(&graph, config).unwrap();
/// for _ in 0..50 {
///     solver.evaluate().unwrap();
///     solver.evolve().unwrap();
/// }
/// solver.evaluate().unwrap();
/// assert!((solver.best_distance() - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct TspSolver<C, R = StdRng> {
    cities: Vec<C>,
    index: HashMap<C, usize>,
    matrix: DistanceMatrix,
    config: SolverConfig,
    population: Vec<Vec<usize>>,
    /// Fitness of each member of `population`, valid until the population
    /// is replaced.
    fitness_cache: Option<Vec<f64>>,
    best: Option<BestTour>,
    generation: usize,
    rng: R,
}

impl<C: Clone + Eq + Hash + Debug> TspSolver<C, StdRng> {
    /// Creates a solver seeded from `config.seed` (random when `None`).
    ///
    /// # Errors
    /// [`TspError::Config`] if the configuration is invalid or the graph has
    /// fewer than two cities.
    pub fn new(graph: &DistanceGraph<C>, config: SolverConfig) -> Result<Self, TspError> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::with_rng(graph, config, rng)
    }
}

impl<C: Clone + Eq + Hash + Debug, R: Rng> TspSolver<C, R> {
    /// Creates a solver drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// [`TspError::Config`] if the configuration is invalid or the graph has
    /// fewer than two cities.
    pub fn with_rng(
        graph: &DistanceGraph<C>,
        config: SolverConfig,
        mut rng: R,
    ) -> Result<Self, TspError> {
        config.validate()?;

        let n = graph.city_count();
        if n < 2 {
            return Err(TspError::Config(format!(
                "graph must contain at least 2 cities, got {n}"
            )));
        }

        let cities = graph.cities().to_vec();
        let index = cities
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();

        let population = (0..config.population_size)
            .map(|_| random_permutation(n, &mut rng))
            .collect();

        Ok(Self {
            cities,
            index,
            matrix: graph.to_matrix(),
            config,
            population,
            fitness_cache: None,
            best: None,
            generation: 0,
            rng,
        })
    }

    // ---- Accessors ----

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Cities in index order.
    pub fn cities(&self) -> &[C] {
        &self.cities
    }

    /// Current population as city-index permutations.
    pub fn population(&self) -> &[Vec<usize>] {
        &self.population
    }

    /// Current population as city labels.
    pub fn tours(&self) -> Vec<Vec<C>> {
        self.population.iter().map(|t| self.to_cities(t)).collect()
    }

    /// Number of completed `evolve()` calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The best tour found so far, if any evaluation has run.
    pub fn best(&self) -> Option<&BestTour> {
        self.best.as_ref()
    }

    /// The best tour found so far as city labels.
    pub fn best_tour(&self) -> Option<Vec<C>> {
        self.best.as_ref().map(|b| self.to_cities(&b.tour))
    }

    /// Fitness of the best tour; `0.0` before the first evaluation.
    pub fn best_fitness(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |b| b.fitness)
    }

    /// Distance of the best tour (reciprocal of its fitness);
    /// `f64::INFINITY` before the first evaluation.
    pub fn best_distance(&self) -> f64 {
        1.0 / self.best_fitness()
    }

    /// Mean distance over the population at the last evaluation, if the
    /// population has been evaluated since it was last replaced.
    pub fn mean_distance(&self) -> Option<f64> {
        let fitnesses = self.fitness_cache.as_ref()?;
        let total: f64 = fitnesses.iter().map(|f| 1.0 / f).sum();
        Some(total / fitnesses.len() as f64)
    }

    // ---- Fitness ----

    /// Fitness of a tour given as city labels.
    ///
    /// # Errors
    /// - [`TspError::InvalidTour`] if two adjacent cities have no distance
    ///   or a city is not in the graph
    /// - [`TspError::DegenerateFitness`] for a zero-length tour under
    ///   [`ZeroDistancePolicy::Reject`](super::ZeroDistancePolicy::Reject)
    pub fn calculate_fitness(&self, tour: &[C]) -> Result<f64, TspError> {
        let mut total = 0.0;
        for leg in tour.windows(2) {
            let d = match (self.index.get(&leg[0]), self.index.get(&leg[1])) {
                (Some(&a), Some(&b)) => self.matrix.get(a, b),
                _ => None,
            };
            total += d.ok_or_else(|| TspError::InvalidTour {
                from: format!("{:?}", leg[0]),
                to: format!("{:?}", leg[1]),
            })?;
        }
        fitness_from_distance(total, self.config.zero_distance)
    }

    /// Fitness of a tour given as city indices.
    ///
    /// # Errors
    /// Same as [`calculate_fitness`](Self::calculate_fitness).
    pub fn index_fitness(&self, tour: &[usize]) -> Result<f64, TspError> {
        let d = tour_distance(&self.matrix, tour).map_err(|e| self.invalid_tour(e))?;
        fitness_from_distance(d, self.config.zero_distance)
    }

    /// Fitness of every member of the population, in population order.
    fn population_fitness(&self) -> Result<Vec<f64>, TspError> {
        self.population_distances()
            .into_iter()
            .map(|d| {
                let d = d.map_err(|e| self.invalid_tour(e))?;
                fitness_from_distance(d, self.config.zero_distance)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn population_distances(&self) -> Vec<Result<f64, MissingEdge>> {
        let matrix = &self.matrix;
        if self.config.parallel {
            self.population
                .par_iter()
                .map(|t| tour_distance(matrix, t))
                .collect()
        } else {
            self.population
                .iter()
                .map(|t| tour_distance(matrix, t))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn population_distances(&self) -> Vec<Result<f64, MissingEdge>> {
        self.population
            .iter()
            .map(|t| tour_distance(&self.matrix, t))
            .collect()
    }

    // ---- Evolutionary steps ----

    /// Scores the population and updates the best tour.
    ///
    /// The best is replaced only by a strictly fitter tour; among equally
    /// fit tours the first one found is kept.
    ///
    /// # Errors
    /// The first fitness error in population order. The best tour is left
    /// untouched in that case.
    pub fn evaluate(&mut self) -> Result<(), TspError> {
        let fitnesses = self.population_fitness()?;

        for (tour, &fitness) in self.population.iter().zip(&fitnesses) {
            if fitness > self.best_fitness() {
                self.best = Some(BestTour {
                    tour: tour.clone(),
                    fitness,
                });
            }
        }

        self.fitness_cache = Some(fitnesses);
        Ok(())
    }

    /// Picks a parent from the population by roulette wheel.
    ///
    /// Scores the population first if it has not been evaluated since it
    /// was last replaced.
    ///
    /// # Errors
    /// Any fitness error from scoring the population.
    pub fn select_parent(&mut self) -> Result<&[usize], TspError> {
        if self.fitness_cache.is_none() {
            self.fitness_cache = Some(self.population_fitness()?);
        }
        let fitnesses = self.fitness_cache.as_deref().unwrap_or_default();
        let idx = selection::roulette(fitnesses, &mut self.rng);
        Ok(&self.population[idx])
    }

    /// Produces one child from two parents. See [`operators::crossover`].
    pub fn crossover(&mut self, parent_a: &[usize], parent_b: &[usize]) -> Vec<usize> {
        operators::crossover(parent_a, parent_b, &mut self.rng)
    }

    /// Applies swap mutation at the configured rate. See [`operators::mutate`].
    pub fn mutate(&mut self, tour: &mut [usize]) {
        operators::mutate(tour, self.config.mutation_rate, &mut self.rng);
    }

    /// Replaces the population with the next generation.
    ///
    /// With elitism the best tour is cloned in first, unchanged. The rest
    /// are children of roulette-selected parents, crossed over and mutated,
    /// until the size given by [`PopulationSizing`](super::PopulationSizing)
    /// is reached.
    ///
    /// # Errors
    /// - [`TspError::NotEvaluated`] with elitism on and no evaluation yet
    /// - any fitness error from scoring the current population
    pub fn evolve(&mut self) -> Result<(), TspError> {
        let n = self.config.population_size;
        let target = match self.config.sizing {
            super::PopulationSizing::Normalized => n,
            super::PopulationSizing::Legacy => n - 1,
        };

        let mut next: Vec<Vec<usize>> = Vec::with_capacity(n);
        if self.config.elitism {
            let best = self.best.as_ref().ok_or(TspError::NotEvaluated)?;
            next.push(best.tour.clone());
        }

        let fitnesses = match self.fitness_cache.take() {
            Some(f) => f,
            None => self.population_fitness()?,
        };

        while next.len() < target {
            let a = selection::roulette(&fitnesses, &mut self.rng);
            let b = selection::roulette(&fitnesses, &mut self.rng);
            let mut child =
                operators::crossover(&self.population[a], &self.population[b], &mut self.rng);
            operators::mutate(&mut child, self.config.mutation_rate, &mut self.rng);
            next.push(child);
        }

        self.population = next;
        self.generation += 1;
        Ok(())
    }

    // ---- Helpers ----

    fn to_cities(&self, tour: &[usize]) -> Vec<C> {
        tour.iter().map(|&i| self.cities[i].clone()).collect()
    }

    fn invalid_tour(&self, edge: MissingEdge) -> TspError {
        let name = |i: usize| {
            self.cities
                .get(i)
                .map_or_else(|| format!("#{i}"), |c| format!("{c:?}"))
        };
        TspError::InvalidTour {
            from: name(edge.from),
            to: name(edge.to),
        }
    }
}
