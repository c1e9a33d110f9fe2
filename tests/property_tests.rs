//! Property-based tests for u-tsp
//!
//! Uses proptest to verify the permutation and elitism invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use u_tsp::graph::DistanceGraph;
use u_tsp::random::create_rng;
use u_tsp::tsp::operators::{crossover, crossover_with_segment, mutate};
use u_tsp::tsp::selection::roulette_pick;
use u_tsp::tsp::{SolverConfig, TspRunner, TspSolver};

fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    let set: HashSet<usize> = perm.iter().copied().collect();
    perm.len() == n && set.len() == n && perm.iter().all(|&v| v < n)
}

fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
}

fn parents() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (2usize..30).prop_flat_map(|n| (permutation(n), permutation(n)))
}

/// Complete symmetric graph with positive weights drawn per pair.
fn complete_graph(n: usize, seed: u64) -> DistanceGraph<usize> {
    let mut graph = DistanceGraph::new();
    for a in 0..n {
        for b in (a + 1)..n {
            let w = 1.0 + ((seed.wrapping_mul(31) ^ (a * 17 + b * 7) as u64) % 97) as f64;
            graph.insert_symmetric(a, b, w).unwrap();
        }
    }
    graph
}

fn reference_graph() -> DistanceGraph<&'static str> {
    DistanceGraph::from_nested(vec![
        ("A", vec![("B", 10.0), ("C", 20.0), ("D", 30.0)]),
        ("B", vec![("A", 10.0), ("C", 40.0), ("D", 50.0)]),
        ("C", vec![("A", 20.0), ("B", 40.0), ("D", 60.0)]),
        ("D", vec![("A", 30.0), ("B", 50.0), ("C", 60.0)]),
    ])
    .unwrap()
}

fn all_permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![vec![]];
    }
    let mut out = Vec::new();
    for perm in all_permutations(n - 1) {
        for pos in 0..=perm.len() {
            let mut p = perm.clone();
            p.insert(pos, n - 1);
            out.push(p);
        }
    }
    out
}

proptest! {
    // ==================== Operator Properties ====================

    #[test]
    fn crossover_preserves_permutation((a, b) in parents(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let child = crossover(&a, &b, &mut rng);
        prop_assert!(is_valid_permutation(&child, a.len()), "child {:?}", child);
    }

    #[test]
    fn crossover_segment_is_prefix(
        (a, b, start, end) in parents().prop_flat_map(|(a, b)| {
            let n = a.len();
            (Just(a), Just(b), 0..n - 1)
                .prop_flat_map(move |(a, b, s)| (Just(a), Just(b), Just(s), s + 1..n))
        })
    ) {
        let child = crossover_with_segment(&a, &b, start, end);
        let seg = end - start;
        prop_assert_eq!(&child[..seg], &a[start..end]);

        // the tail keeps parent B's relative order
        let tail: Vec<usize> = b.iter().copied().filter(|c| !a[start..end].contains(c)).collect();
        prop_assert_eq!(&child[seg..], tail.as_slice());
    }

    #[test]
    fn mutation_preserves_permutation(
        tour in (1usize..30).prop_flat_map(permutation),
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut tour = tour;
        let n = tour.len();
        let mut rng = create_rng(seed);
        mutate(&mut tour, rate, &mut rng);
        prop_assert!(is_valid_permutation(&tour, n));
    }

    #[test]
    fn roulette_pick_in_range(
        fitnesses in prop::collection::vec(1e-6f64..1.0, 1..50),
        frac in 0.0f64..1.5
    ) {
        let total: f64 = fitnesses.iter().sum();
        let idx = roulette_pick(&fitnesses, frac * total);
        prop_assert!(idx < fitnesses.len());
    }

    // ==================== Solver Properties ====================

    #[test]
    fn evolve_keeps_permutations_and_elite(
        n in 2usize..9,
        population in 2usize..20,
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let config = SolverConfig::default()
            .with_population_size(population)
            .with_mutation_rate(rate)
            .with_seed(seed);
        let mut solver = TspSolver::new(&complete_graph(n, seed), config).unwrap();

        for tour in solver.population() {
            prop_assert!(is_valid_permutation(tour, n));
        }

        let mut last_fitness = 0.0;
        for _ in 0..5 {
            solver.evaluate().unwrap();
            prop_assert!(solver.best_fitness() >= last_fitness);
            last_fitness = solver.best_fitness();

            let elite = solver.best().unwrap().tour().to_vec();
            solver.evolve().unwrap();

            prop_assert_eq!(solver.population().len(), population);
            prop_assert!(solver.population().contains(&elite));
            for tour in solver.population() {
                prop_assert!(is_valid_permutation(tour, n));
            }
        }
    }

    #[test]
    fn selected_parent_is_member(n in 2usize..8, seed in any::<u64>()) {
        let config = SolverConfig::default().with_population_size(10).with_seed(seed);
        let mut solver = TspSolver::new(&complete_graph(n, seed), config).unwrap();
        let parent = solver.select_parent().unwrap().to_vec();
        prop_assert!(solver.population().contains(&parent));
    }
}

// ==================== End-to-end ====================

#[test]
fn reference_graph_reaches_exhaustive_optimum() {
    let graph = reference_graph();
    let config = SolverConfig::default()
        .with_population_size(200)
        .with_generations(1000)
        .with_mutation_rate(0.01)
        .with_elitism(true)
        .with_seed(2024);

    let solver = TspSolver::new(&graph, config.clone()).unwrap();
    let initial_best = solver
        .population()
        .iter()
        .map(|t| 1.0 / solver.index_fitness(t).unwrap())
        .fold(f64::INFINITY, f64::min);

    let optimum = all_permutations(graph.city_count())
        .iter()
        .map(|t| 1.0 / solver.index_fitness(t).unwrap())
        .fold(f64::INFINITY, f64::min);
    assert!((optimum - 80.0).abs() < 1e-9);

    let result = TspRunner::run(&graph, &config).unwrap();
    assert!(result.best_distance <= initial_best + 1e-9);
    assert!((result.best_distance - optimum).abs() < 1e-9);

    let fitness = solver.calculate_fitness(&result.best_tour).unwrap();
    assert!((1.0 / fitness - result.best_distance).abs() < 1e-9);
}
