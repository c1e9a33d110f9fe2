//! Weighted directed distance graph over arbitrary city labels.
//!
//! [`DistanceGraph`] is the input to the solver. Cities are assigned dense
//! indices in first-insertion order; the solver works on those indices and
//! compiles the graph into a [`DistanceMatrix`] once at construction.

use crate::error::TspError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Distances between ordered pairs of distinct cities.
///
/// Symmetry is not assumed: `insert(a, b, d)` defines only `a -> b`.
/// Use [`insert_symmetric`](Self::insert_symmetric) for undirected edges.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::DistanceGraph;
///
/// let mut graph = DistanceGraph::new();
/// graph.insert_symmetric("A", "B", 10.0).unwrap();
/// graph.insert("B", "C", 40.0).unwrap();
///
/// assert_eq!(graph.city_count(), 3);
/// assert_eq!(graph.distance(&"B", &"A"), Some(10.0));
/// assert_eq!(graph.distance(&"C", &"B"), None);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceGraph<C> {
    cities: Vec<C>,
    index: HashMap<C, usize>,
    edges: HashMap<(usize, usize), f64>,
}

impl<C> Default for DistanceGraph<C> {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            index: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

impl<C: Clone + Eq + Hash + Debug> DistanceGraph<C> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from directed `(from, to, distance)` edges.
    pub fn from_edges<I>(edges: I) -> Result<Self, TspError>
    where
        I: IntoIterator<Item = (C, C, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, distance) in edges {
            graph.insert(from, to, distance)?;
        }
        Ok(graph)
    }

    /// Builds a graph from an adjacency listing: each source city with the
    /// distances to its neighbours.
    ///
    /// Source cities are registered in iteration order even if they have no
    /// outgoing edges.
    ///
    /// ```
    /// use u_tsp::graph::DistanceGraph;
    ///
    /// let graph = DistanceGraph::from_nested(vec![
    ///     ('A', vec![('B', 10.0), ('C', 20.0)]),
    ///     ('B', vec![('A', 10.0), ('C', 40.0)]),
    ///     ('C', vec![('A', 20.0), ('B', 40.0)]),
    /// ])
    /// .unwrap();
    /// assert_eq!(graph.cities(), &['A', 'B', 'C']);
    /// ```
    pub fn from_nested<I, N>(adjacency: I) -> Result<Self, TspError>
    where
        I: IntoIterator<Item = (C, N)>,
        N: IntoIterator<Item = (C, f64)>,
    {
        let mut graph = Self::new();
        for (from, neighbours) in adjacency {
            graph.add_city(from.clone());
            for (to, distance) in neighbours {
                graph.insert(from.clone(), to, distance)?;
            }
        }
        Ok(graph)
    }

    /// Registers a city without edges. Returns its index.
    pub fn add_city(&mut self, city: C) -> usize {
        if let Some(&idx) = self.index.get(&city) {
            return idx;
        }
        let idx = self.cities.len();
        self.index.insert(city.clone(), idx);
        self.cities.push(city);
        idx
    }

    /// Sets the distance `from -> to`, replacing any previous value.
    ///
    /// Both endpoints are registered as cities. A self-loop registers the
    /// city but stores no edge.
    ///
    /// # Errors
    /// [`TspError::InvalidDistance`] if `distance` is negative or not finite.
    pub fn insert(&mut self, from: C, to: C, distance: f64) -> Result<(), TspError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(TspError::InvalidDistance {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                distance,
            });
        }
        let a = self.add_city(from);
        let b = self.add_city(to);
        if a != b {
            self.edges.insert((a, b), distance);
        }
        Ok(())
    }

    /// Sets the distance in both directions.
    pub fn insert_symmetric(&mut self, a: C, b: C, distance: f64) -> Result<(), TspError> {
        self.insert(a.clone(), b.clone(), distance)?;
        self.insert(b, a, distance)
    }

    /// Returns the cities in index order.
    pub fn cities(&self) -> &[C] {
        &self.cities
    }

    /// Returns the number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the index assigned to `city`.
    pub fn index_of(&self, city: &C) -> Option<usize> {
        self.index.get(city).copied()
    }

    /// Returns the distance `from -> to`, if defined.
    pub fn distance(&self, from: &C, to: &C) -> Option<f64> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        self.edges.get(&(a, b)).copied()
    }

    /// Returns true if every ordered pair of distinct cities has a distance.
    pub fn is_complete(&self) -> bool {
        let n = self.cities.len();
        self.edges.len() == n * n.saturating_sub(1)
    }

    /// Compiles the graph into a dense matrix indexed by city index.
    pub fn to_matrix(&self) -> DistanceMatrix {
        let n = self.cities.len();
        let mut cells = vec![None; n * n];
        for (&(a, b), &d) in &self.edges {
            cells[a * n + b] = Some(d);
        }
        DistanceMatrix { n, cells }
    }
}

/// Dense `n x n` distance lookup by city index.
///
/// Missing edges (and the diagonal) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// Number of cities.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Distance `from -> to`, or `None` when undefined or out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.n || to >= self.n {
            return None;
        }
        self.cells[from * self.n + to]
    }
}
