use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Trait representing a weighted graph keyed by opaque vertex identifiers
///
/// Vertices are interned to dense indices in registration order. The
/// index-level methods are what the shortest path algorithms iterate over;
/// the identifier-level methods are built on top of them.
pub trait WeightedGraph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Returns the number of registered vertices
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored directed edge entries
    fn edge_count(&self) -> usize;

    /// Returns the dense index of a vertex, if it was registered
    fn index_of(&self, vertex: &V) -> Option<usize>;

    /// Returns the vertex identifier stored at a dense index
    fn vertex(&self, index: usize) -> Option<&V>;

    /// Returns an iterator over the outgoing edges of the vertex at `index`,
    /// in insertion order
    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex was registered as an endpoint of an edge
    /// or added explicitly
    fn contains(&self, vertex: &V) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Returns the `(neighbor, weight)` pairs of `vertex` in insertion order.
    /// Unknown vertices have no neighbors.
    fn neighbors<'a>(&'a self, vertex: &V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a>
    where
        V: 'a,
        W: 'a,
    {
        match self.index_of(vertex) {
            Some(index) => Box::new(
                self.outgoing_edges(index)
                    .filter_map(move |(target, weight)| self.vertex(target).map(|v| (v, weight))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Returns the registered vertices in registration order
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a,
    {
        Box::new((0..self.vertex_count()).filter_map(move |index| self.vertex(index)))
    }

    /// Returns true if at least one edge `from -> to` is stored
    fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => self.outgoing_edges(from).any(|(target, _)| target == to),
            _ => false,
        }
    }
}

/// Trait for graph construction
///
/// Only insertions are supported; a graph is built once and then queried.
pub trait MutableGraph<V, W>: WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Registers an isolated vertex. Returns false if it already existed.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds an edge `from -> to`, and `to -> from` as well when `undirected`.
    ///
    /// Both endpoints are registered. Fails with [`crate::Error::InvalidWeight`]
    /// for negative or non-finite weights, leaving the graph untouched.
    /// Parallel edges are kept as separate entries.
    fn add_edge(&mut self, from: V, to: V, weight: W, undirected: bool) -> Result<()>;

    /// Adds a single directed edge
    fn add_directed_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        self.add_edge(from, to, weight, false)
    }

    /// Adds an edge in both directions with the same weight
    fn add_undirected_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        self.add_edge(from, to, weight, true)
    }
}
