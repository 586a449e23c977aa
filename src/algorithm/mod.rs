pub mod traits;
pub mod dijkstra;

pub use traits::{
    reconstruct_path, DistanceMap, Path, PredecessorMap, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};
