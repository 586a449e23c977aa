pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{WeightedGraph, MutableGraph};
pub use adjacency::{AdjacencyGraph, EdgeRecord};
