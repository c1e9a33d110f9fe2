//! Permutation crossover and mutation for tours.
//!
//! Tours are `&[usize]` permutations of city indices `0..n`. Both operators
//! preserve the permutation property by construction.
//!
//! # Crossover
//!
//! - [`crossover`]: segment-prefix crossover. A slice of parent A becomes the
//!   head of the child; the rest follows parent B's order.
//!
//! # Mutation
//!
//! - [`mutate`]: per-position Bernoulli swap mutation.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Segment-prefix crossover producing one child.
///
/// # Algorithm
///
/// 1. Draw `start` uniformly from `[0, n-2]`, then `end` uniformly from
///    `[start+1, n-1]`
/// 2. The child begins with `parent_a[start..end]`, in order
/// 3. Append every city of `parent_b`, in `parent_b`'s order, that is not
///    already in the child
///
/// Unlike OX, the donor segment is not kept at its original positions.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    if n < 2 {
        return parent_a.to_vec();
    }

    let (start, end) = random_boundaries(n, rng);
    crossover_with_segment(parent_a, parent_b, start, end)
}

/// Builds the crossover child for a fixed donor segment `[start, end)`.
///
/// # Panics
/// Panics if parents have different lengths, if `start >= end` or
/// `end > n`, or if a parent holds a city index `>= n`.
pub fn crossover_with_segment(
    parent_a: &[usize],
    parent_b: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(start < end && end <= n, "invalid segment [{start}, {end}) for length {n}");

    let mut child = Vec::with_capacity(n);
    let mut present = vec![false; n];

    for &city in &parent_a[start..end] {
        child.push(city);
        present[city] = true;
    }

    for &city in parent_b {
        if !present[city] {
            child.push(city);
            present[city] = true;
        }
    }

    child
}

/// Draws crossover boundaries: `start` in `[0, n-2]`, `end` in `[start+1, n-1]`.
///
/// `end` never reaches `n`, so the last city of parent A is never part of
/// the donor segment.
fn random_boundaries<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(0..=n - 2);
    let end = rng.random_range(start + 1..=n - 1);
    (start, end)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation applied independently at every position.
///
/// For each position `i`, with probability `rate`, swaps `tour[i]` with
/// `tour[j]` for `j` uniform in `[0, n-1]`. `j == i` leaves the tour as is.
/// The number of swaps is therefore binomial, not fixed.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn mutate<R: Rng>(tour: &mut [usize], rate: f64, rng: &mut R) {
    let n = tour.len();
    for i in 0..n {
        if rng.random_bool(rate) {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
