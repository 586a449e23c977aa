use crate::graph::traits::{MutableGraph, WeightedGraph};
use crate::{Error, Result};
use log::warn;
use num_traits::{Float, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A single edge as read from an edge list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<V, W = f64> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> EdgeRecord<V, W> {
    pub fn new(from: V, to: V, weight: W) -> Self {
        EdgeRecord { from, to, weight }
    }
}

/// A weighted graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W = f64>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Vertex identifier -> dense index
    indices: HashMap<V, usize>,

    /// Dense index -> vertex identifier, in registration order
    vertices: Vec<V>,

    /// Outgoing edges for each vertex: vertex_index -> [(target_index, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of directed edge entries
    edge_count: usize,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            indices: HashMap::new(),
            vertices: Vec::new(),
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            indices: HashMap::with_capacity(vertices),
            vertices: Vec::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list, stopping at the first invalid edge
    pub fn from_edges<I>(edges: I, undirected: bool) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeRecord<V, W>>,
    {
        let mut graph = AdjacencyGraph::new();
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.weight, undirected)?;
        }
        Ok(graph)
    }

    /// Returns the edge list of this graph, one record per stored entry
    pub fn edges(&self) -> Vec<EdgeRecord<V, W>> {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| {
                edges.iter().map(move |&(to, weight)| {
                    EdgeRecord::new(self.vertices[from].clone(), self.vertices[to].clone(), weight)
                })
            })
            .collect()
    }

    /// Returns the dense index for `vertex`, registering it if needed
    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.indices.get(&vertex) {
            return index;
        }

        let index = self.vertices.len();
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        self.outgoing_edges.push(Vec::new());
        index
    }

    fn validate_weight(weight: W) -> Result<()> {
        if weight.is_finite() && weight >= W::zero() {
            Ok(())
        } else {
            Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)))
        }
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> WeightedGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(index) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_key(&vertex) {
            return false;
        }
        self.intern(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W, undirected: bool) -> Result<()> {
        // Reject before registering anything so a failed insertion leaves no trace
        if let Err(err) = Self::validate_weight(weight) {
            warn!("Rejected edge {:?} -> {:?}: {}", from, to, err);
            return Err(err);
        }

        let from = self.intern(from);
        let to = self.intern(to);

        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;

        if undirected {
            self.outgoing_edges[to].push((from, weight));
            self.edge_count += 1;
        }

        Ok(())
    }
}
