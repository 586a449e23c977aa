use lazy_sssp::graph::{AdjacencyGraph, EdgeRecord, WeightedGraph};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use std::env;
use std::fs::File;
use std::io::BufReader;

/// Sample road network used when no edge list is given
fn sample_edges() -> Vec<EdgeRecord<String>> {
    [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 5.0),
        ("B", "D", 10.0),
        ("C", "E", 3.0),
        ("E", "D", 4.0),
        ("D", "F", 11.0),
    ]
    .into_iter()
    .map(|(from, to, weight)| EdgeRecord::new(from.to_string(), to.to_string(), weight))
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [edges.json] [source] [--directed]
    let mut args: Vec<String> = env::args().skip(1).collect();
    let directed = match args.iter().position(|arg| arg == "--directed") {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    };

    let edges: Vec<EdgeRecord<String>> = match args.first() {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => sample_edges(),
    };
    let graph = AdjacencyGraph::from_edges(edges, !directed)?;

    let source = match args.get(1) {
        Some(source) => source.clone(),
        None => graph.vertex(0).cloned().ok_or("edge list is empty")?,
    };

    let result = Dijkstra::new().compute(&graph, &source)?;

    let mut vertices: Vec<&String> = graph.vertices().collect();
    vertices.sort();

    println!("Shortest distances from {}:", source);
    for vertex in &vertices {
        match result.distance(vertex) {
            Some(distance) => println!("  {}: {}", vertex, distance),
            None => println!("  {}: inf", vertex),
        }
    }

    println!("\nRoutes:");
    for vertex in &vertices {
        match result.path_to(vertex) {
            Some(path) => println!(
                "  {} -> {}: {} (cost {})",
                source,
                vertex,
                path.vertices.join(" -> "),
                path.weight
            ),
            None => println!("  {} -> {}: unreachable", source, vertex),
        }
    }

    log::info!(
        "Settled {} vertices with {} relaxations ({} stale entries skipped)",
        result.stats.settled,
        result.stats.relaxed,
        result.stats.stale_skipped
    );

    Ok(())
}
