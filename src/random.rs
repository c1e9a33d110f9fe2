//! Random number utilities.
//!
//! Every stochastic step of the solver draws from one explicitly threaded
//! generator, so a run is reproducible from its seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tsp::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `0..n`.
///
/// Uses `rand`'s Fisher–Yates shuffle, so every ordering is equally likely.
///
/// # Complexity
/// O(n)
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..10 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_permutation_keeps_elements() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut perm = random_permutation(12, &mut rng);
            perm.sort_unstable();
            assert_eq!(perm, (0..12).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_permutation_empty_and_single() {
        let mut rng = create_rng(42);
        assert!(random_permutation(0, &mut rng).is_empty());
        assert_eq!(random_permutation(1, &mut rng), vec![0]);
    }

    #[test]
    fn test_permutation_is_roughly_uniform() {
        // 3 elements -> 6 orderings, each expected ~1/6 of the draws
        let mut rng = create_rng(42);
        let mut counts: HashMap<Vec<usize>, u32> = HashMap::new();
        let n = 60_000;
        for _ in 0..n {
            *counts.entry(random_permutation(3, &mut rng)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, &c) in &counts {
            assert!(
                (8_000..12_000).contains(&c),
                "ordering {perm:?} drawn {c} times out of {n}"
            );
        }
    }
}
