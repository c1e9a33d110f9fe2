//! Genetic-algorithm heuristic solver for the Traveling Salesman Problem.
//!
//! Given distances between cities, evolves a population of candidate tours
//! toward the shortest path that visits every city exactly once:
//!
//! - **Graph** ([`graph`]): Directed distances between arbitrary city labels
//! - **Solver** ([`tsp`]): Population, roulette selection, segment crossover,
//!   swap mutation and elitism, driven one generation at a time or by
//!   [`TspRunner`](tsp::TspRunner)
//! - **Randomness** ([`random`]): Seeded generators and Fisher–Yates shuffling,
//!   so every run is reproducible
//!
//! The crate performs no I/O. Progress is reported through the observer
//! callback of [`TspRunner::run_with_observer`](tsp::TspRunner::run_with_observer).
//!
//! # Features
//!
//! - `parallel`: score tours with rayon
//! - `serde`: `Serialize`/`Deserialize` for configuration and results

pub mod error;
pub mod graph;
pub mod random;
pub mod tsp;

pub use error::TspError;
