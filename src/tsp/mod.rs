//! Genetic algorithm for the open-path Traveling Salesman Problem.
//!
//! Evolves a population of tours (permutations of every city) toward the
//! shortest Hamiltonian path through a [`DistanceGraph`](crate::graph::DistanceGraph).
//! The tour does not return to its starting city.
//!
//! # Key Types
//!
//! - [`SolverConfig`]: Algorithm parameters (population size, mutation rate, elitism)
//! - [`TspSolver`]: Owns the population and the best tour; one `evaluate`/`evolve` step at a time
//! - [`TspRunner`]: Executes a fixed number of generations
//! - [`TspResult`]: Best tour of a run with its distance history
//!
//! # Submodules
//!
//! - [`fitness`]: Open-path tour length and `1 / distance` fitness
//! - [`selection`]: Roulette wheel parent selection
//! - [`operators`]: Segment-prefix crossover and per-position swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod solver;

pub use config::{PopulationSizing, SolverConfig, ZeroDistancePolicy};
pub use runner::{GenerationStats, TspResult, TspRunner};
pub use solver::{BestTour, TspSolver};
