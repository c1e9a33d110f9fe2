//! Error types for u-tsp.

use thiserror::Error;

/// Error type for graph construction and solver operations.
///
/// All variants describe structural problems with the input; none are
/// transient, so callers should not retry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TspError {
    /// Invalid solver parameters or a graph too small to route.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A tour visits two adjacent cities with no distance defined between them.
    #[error("no distance defined from {from} to {to}")]
    InvalidTour { from: String, to: String },

    /// A tour has zero total distance, so its fitness `1 / distance` is undefined.
    #[error("tour has zero total distance; fitness is undefined")]
    DegenerateFitness,

    /// A negative or non-finite distance was inserted into a graph.
    #[error("invalid distance {distance} from {from} to {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    /// Elitism needs a best-known tour, which only exists after an evaluation.
    #[error("elitism requires evaluate() before evolve()")]
    NotEvaluated,
}
