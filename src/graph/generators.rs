use crate::graph::{AdjacencyGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph on vertices `0..n` with about
/// `edge_factor * n` edges and weights drawn from `[0, max_weight)`.
///
/// Every vertex is registered even if it ends up without edges. Self-loops
/// and parallel edges are allowed, as the engine must handle both.
pub fn generate_random<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: f64,
) -> AdjacencyGraph<usize, f64> {
    assert!(max_weight > 0.0, "max_weight must be positive");

    let mut graph = AdjacencyGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0.0..max_weight);
        // Weights are in range, so insertion cannot fail
        let _ = graph.add_directed_edge(u, v, weight);
    }

    graph
}

/// Generates an undirected `width x height` grid with 4-connectivity and
/// unit weights. Vertex ids are `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(index(x, y));
            if x + 1 < width {
                let _ = graph.add_undirected_edge(index(x, y), index(x + 1, y), 1.0);
            }
            if y + 1 < height {
                let _ = graph.add_undirected_edge(index(x, y), index(x, y + 1), 1.0);
            }
        }
    }

    graph
}

/// Generates a random geometric graph: `n` points in the unit square,
/// undirected edges between points closer than `r`, weighted by distance
pub fn generate_geometric<R: Rng + ?Sized>(rng: &mut R, n: usize, r: f64) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(n);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|v| {
            graph.add_vertex(v);
            (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
        })
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            if dist <= r {
                let _ = graph.add_undirected_edge(i, j, dist);
            }
        }
    }

    graph
}
