use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::Float;
use rayon::prelude::*;

use crate::graph::WeightedGraph;
use crate::algorithm::{DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion frontier
///
/// When several edges reach a vertex with the same minimal distance, the
/// first improving edge wins; extraction order among equal distances is
/// otherwise unspecified.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Whether to count frontier and relaxation operations
    collect_stats: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { collect_stats: true }
    }

    /// Enable or disable collection of [`SearchStats`]. Disabled runs report zeroed counters.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Runs one independent search per source in parallel over a shared graph.
    /// Results come back in the order of `sources`.
    pub fn compute_many<V, W, G>(&self, graph: &G, sources: &[V]) -> Vec<Result<ShortestPathResult<V, W>>>
    where
        V: Clone + Eq + Hash + Debug + Send + Sync,
        W: Float + Debug + Send + Sync,
        G: WeightedGraph<V, W> + Sync,
    {
        sources
            .par_iter()
            .map(|source| ShortestPathAlgorithm::<V, W, G>::compute(self, graph, source))
            .collect()
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: WeightedGraph<V, W>,
{
    fn compute(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        let source_index = graph
            .index_of(source)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", source)))?;

        let n = graph.vertex_count();
        debug!(
            "Dijkstra from {:?} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        // Initialize distances and predecessors
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();
        let track = self.collect_stats;

        distances[source_index] = W::zero();

        let mut frontier = Frontier::new();
        frontier.push(source_index, W::zero());
        if track {
            stats.pushes += 1;
        }

        while let Some((u, dist_u)) = frontier.pop() {
            // Superseded by a later, shorter push
            if dist_u > distances[u] {
                trace!("Skipping stale entry for vertex {} ({:?} > {:?})", u, dist_u, distances[u]);
                if track {
                    stats.stale_skipped += 1;
                }
                continue;
            }

            if track {
                stats.settled += 1;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;

                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                    if track {
                        stats.relaxed += 1;
                        stats.pushes += 1;
                    }
                }
            }
        }

        let mut distance_map = HashMap::with_capacity(n);
        let mut predecessor_map = HashMap::with_capacity(n);
        for (index, (distance, predecessor)) in distances.into_iter().zip(predecessors).enumerate() {
            let vertex = match graph.vertex(index) {
                Some(vertex) => vertex.clone(),
                None => continue,
            };
            let predecessor = predecessor.and_then(|p| graph.vertex(p)).cloned();
            distance_map.insert(vertex.clone(), distance);
            predecessor_map.insert(vertex, predecessor);
        }

        debug!(
            "Dijkstra from {:?} finished: {} settled, {} relaxed, {} stale skipped",
            source, stats.settled, stats.relaxed, stats.stale_skipped
        );

        Ok(ShortestPathResult {
            distances: DistanceMap::new(distance_map),
            predecessors: PredecessorMap::new(predecessor_map),
            source: source.clone(),
            stats,
        })
    }
}
