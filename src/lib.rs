//! Lazy SSSP - Single-Source Shortest Paths over weighted adjacency graphs
//!
//! This library implements Dijkstra's algorithm on graphs with non-negative
//! edge weights. The frontier is a plain binary heap without decrease-key:
//! improved vertices are pushed again and superseded entries are skipped
//! when they are extracted.
//!
//! ```
//! use lazy_sssp::{AdjacencyGraph, Dijkstra, ShortestPathAlgorithm};
//! use lazy_sssp::graph::MutableGraph;
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("A", "B", 4.0, true).unwrap();
//! graph.add_edge("A", "C", 2.0, true).unwrap();
//! graph.add_edge("C", "B", 1.0, true).unwrap();
//!
//! let result = Dijkstra::new().compute(&graph, &"A").unwrap();
//! assert_eq!(result.distance(&"B"), Some(3.0));
//! assert_eq!(result.path_to(&"B").unwrap().vertices, vec!["A", "C", "B"]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, reconstruct_path, DistanceMap, Path, PredecessorMap, SearchStats,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid edge weight: {0} (weights must be finite and non-negative)")]
    InvalidWeight(f64),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
