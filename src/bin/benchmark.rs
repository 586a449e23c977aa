use std::env;
use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use lazy_sssp::graph::generators::generate_random;
use lazy_sssp::graph::{AdjacencyGraph, WeightedGraph};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};

// Function to benchmark a single run on a graph
fn benchmark_run(dijkstra: &Dijkstra, graph: &AdjacencyGraph<usize, f64>, source: usize) -> Result<Duration, lazy_sssp::Error> {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    let result = dijkstra.compute(graph, &source)?;
    let duration = start.elapsed();

    let reachable = graph.vertices().filter(|v| result.is_reachable(v)).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);
    println!(
        "  - {} pushes, {} stale entries skipped",
        result.stats.pushes, result.stats.stale_skipped
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let max_vertices: usize = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 200_000,
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);
    let dijkstra = Dijkstra::new();

    println!("=====================================================");
    println!("Benchmark: lazy-deletion Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    let mut size = 1_000;
    while size <= max_vertices {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(&mut rng, size, edge_factor, 100.0);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let duration = benchmark_run(&dijkstra, &graph, 0)?;
        results.push((size, graph.edge_count(), duration));
        size *= 10;
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Vertices", "Edges", "Dijkstra (ms)");
    println!("-----------------------------------------------------");
    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<15.2}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
