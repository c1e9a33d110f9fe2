//! Tour length and fitness.
//!
//! A tour is an open path: the distance sums consecutive legs and does not
//! return from the last city to the first. Fitness is the reciprocal of
//! that distance, so shorter tours are fitter.

use super::config::ZeroDistancePolicy;
use crate::error::TspError;
use crate::graph::DistanceMatrix;

/// An adjacent pair of city indices with no distance in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingEdge {
    /// Index of the city the leg starts at.
    pub from: usize,
    /// Index of the city the leg ends at.
    pub to: usize,
}

/// Total open-path distance of `tour`.
///
/// Tours with fewer than two cities have distance 0.
///
/// # Errors
/// The first leg, in tour order, whose distance is undefined.
///
/// # Complexity
/// O(n)
pub fn tour_distance(matrix: &DistanceMatrix, tour: &[usize]) -> Result<f64, MissingEdge> {
    tour.windows(2).try_fold(0.0, |total, leg| {
        let (from, to) = (leg[0], leg[1]);
        matrix
            .get(from, to)
            .map(|d| total + d)
            .ok_or(MissingEdge { from, to })
    })
}

/// Converts a tour distance into fitness (`1 / distance`).
///
/// # Errors
/// [`TspError::DegenerateFitness`] for a zero distance under
/// [`ZeroDistancePolicy::Reject`].
pub fn fitness_from_distance(distance: f64, policy: ZeroDistancePolicy) -> Result<f64, TspError> {
    if distance > 0.0 {
        return Ok(1.0 / distance);
    }
    match policy {
        ZeroDistancePolicy::Reject => Err(TspError::DegenerateFitness),
        ZeroDistancePolicy::Ceiling(c) => Ok(c),
    }
}
