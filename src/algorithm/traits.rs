use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::WeightedGraph;
use crate::Result;

/// Shortest known distance from the source for every registered vertex.
/// Unreachable vertices map to `W::infinity()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap<V, W>
where
    V: Eq + Hash,
{
    distances: HashMap<V, W>,
}

impl<V, W> DistanceMap<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    pub(crate) fn new(distances: HashMap<V, W>) -> Self {
        DistanceMap { distances }
    }

    /// Recorded distance of `vertex`, infinite when unreachable.
    /// `None` only for vertices the graph never registered.
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get(vertex).map_or(false, |d| d.is_finite())
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over `(vertex, distance)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }
}

/// Immediate predecessor on a shortest path for every registered vertex.
/// The source and unreachable vertices have none.
#[derive(Debug, Clone, PartialEq)]
pub struct PredecessorMap<V>
where
    V: Eq + Hash,
{
    predecessors: HashMap<V, Option<V>>,
}

impl<V> PredecessorMap<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub(crate) fn new(predecessors: HashMap<V, Option<V>>) -> Self {
        PredecessorMap { predecessors }
    }

    /// Predecessor of `vertex`, if it has one
    pub fn get(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|p| p.as_ref())
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.predecessors.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Iterates over `(vertex, predecessor)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<&V>)> + '_ {
        self.predecessors.iter().map(|(v, p)| (v, p.as_ref()))
    }
}

/// Counters collected during one shortest path run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices extracted with their final distance
    pub settled: usize,
    /// Strictly improving relaxations
    pub relaxed: usize,
    /// Entries pushed onto the frontier, the seed included
    pub pushes: usize,
    /// Superseded frontier entries discarded on extraction
    pub stale_skipped: usize,
}

/// A concrete route from the source to a reachable target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<V, W = f64> {
    /// Vertices in source-to-target order
    pub vertices: Vec<V>,
    /// Total weight of the route
    pub weight: W,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash,
{
    /// Distances from source to each vertex
    pub distances: DistanceMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorMap<V>,

    /// Source vertex
    pub source: V,

    /// Counters for this run
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Finite distance to `target`, or `None` when it is unreachable or unknown
    pub fn distance(&self, target: &V) -> Option<W> {
        self.distances.get(target).filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, target: &V) -> bool {
        self.distances.is_reachable(target)
    }

    /// Shortest route to `target`, or `None` when it is unreachable
    pub fn path_to(&self, target: &V) -> Option<Path<V, W>> {
        let weight = self.distance(target)?;
        Some(Path {
            vertices: reconstruct_path(&self.predecessors, target),
            weight,
        })
    }

    /// Splits the result into its distance and predecessor maps
    pub fn into_parts(self) -> (DistanceMap<V, W>, PredecessorMap<V>) {
        (self.distances, self.predecessors)
    }
}

/// Walks predecessors back from `target` and returns the vertices in
/// source-to-target order.
///
/// A target without a predecessor yields `[target]`: that is the source
/// itself, or a vertex that was never reached. Check the distance map before
/// treating a single-vertex path as a route.
pub fn reconstruct_path<V>(predecessors: &PredecessorMap<V>, target: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(previous) = predecessors.get(current) {
        path.push(previous.clone());
        current = previous;
        debug_assert!(
            path.len() <= predecessors.len(),
            "predecessor chain longer than the vertex set"
        );
    }

    path.reverse();
    path
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: WeightedGraph<V, W>,
{
    /// Compute shortest paths from a source vertex to all registered vertices
    ///
    /// Fails with [`crate::Error::UnknownVertex`] if `source` was never
    /// registered in `graph`. Unreachable vertices are reported with an
    /// infinite distance and no predecessor.
    fn compute(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;
}
