//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Fitness here is already "higher is better" (`1 / distance`), so weights
//! are the raw fitness values with no inversion.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Selects an index with probability proportional to its fitness.
///
/// Draws a uniform value in `[0, total)` and scans with [`roulette_pick`].
/// A total that is not positive and finite cannot be sampled, so the last
/// index is returned, as in the scan's fallback.
///
/// # Panics
/// Panics if `fitnesses` is empty.
///
/// # Complexity
/// O(n) per selection
pub fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let total: f64 = fitnesses.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return fitnesses.len() - 1;
    }
    let draw = rng.random_range(0.0..total);
    roulette_pick(fitnesses, draw)
}

/// Scans the wheel for a given draw.
///
/// Subtracts each fitness from `draw` in order and returns the first index
/// at which the remainder is `<= 0`. If the remainder never reaches zero,
/// which happens when rounding makes the running sum fall short of the
/// total the draw was taken from, the last index is returned.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn roulette_pick(fitnesses: &[f64], draw: f64) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let mut remaining = draw;
    for (i, &f) in fitnesses.iter().enumerate() {
        remaining -= f;
        if remaining <= 0.0 {
            return i;
        }
    }

    fitnesses.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_pick_boundaries() {
        let weights = [1.0, 2.0, 3.0];
        assert_eq!(roulette_pick(&weights, 0.0), 0);
        assert_eq!(roulette_pick(&weights, 1.0), 0);
        assert_eq!(roulette_pick(&weights, 1.5), 1);
        assert_eq!(roulette_pick(&weights, 3.0), 1);
        assert_eq!(roulette_pick(&weights, 3.1), 2);
        assert_eq!(roulette_pick(&weights, 5.999), 2);
    }

    #[test]
    fn test_pick_fallback_to_last() {
        // A draw past the accumulated total never crosses zero.
        let weights = [0.1, 0.2, 0.3];
        assert_eq!(roulette_pick(&weights, 0.6 + 1e-9), 2);
        assert_eq!(roulette_pick(&weights, 10.0), 2);
    }

    #[test]
    fn test_pick_fallback_from_rounding() {
        // Sum of ten 0.1s is 0.9999999999999999; the fallback must pick the
        // last slot rather than run off the end.
        let weights = [0.1; 10];
        assert_eq!(roulette_pick(&weights, 1.0), 9);
    }

    #[test]
    fn test_roulette_favors_fitter() {
        let fitnesses = [1.0, 5.0, 1.0, 3.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[roulette(&fitnesses, &mut rng)] += 1;
        }
        // expected shares: 10%, 50%, 10%, 30%
        assert!(counts[1] > 4_500 && counts[1] < 5_500, "counts: {counts:?}");
        assert!(counts[3] > counts[0] && counts[3] > counts[2], "counts: {counts:?}");
    }

    #[test]
    fn test_roulette_in_range() {
        let fitnesses = [0.02, 0.01, 0.05];
        let mut rng = create_rng(7);
        for _ in 0..1_000 {
            assert!(roulette(&fitnesses, &mut rng) < 3);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(roulette(&[0.5], &mut rng), 0);
    }

    #[test]
    fn test_degenerate_total_falls_back() {
        let mut rng = create_rng(42);
        assert_eq!(roulette(&[0.0, 0.0, 0.0], &mut rng), 2);
        assert_eq!(roulette(&[f64::MAX, f64::MAX], &mut rng), 1);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        roulette(&[], &mut rng);
    }
}
