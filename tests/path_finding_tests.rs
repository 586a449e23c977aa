use lazy_sssp::graph::generators::{generate_geometric, generate_grid, generate_random};
use lazy_sssp::graph::{AdjacencyGraph, MutableGraph, WeightedGraph};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Minimum path weight from source to every vertex by exhaustive DFS over simple paths
fn brute_force_distances(graph: &AdjacencyGraph<usize, f64>, source: usize) -> Vec<f64> {
    fn visit(
        graph: &AdjacencyGraph<usize, f64>,
        vertex: usize,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<f64>,
    ) {
        if cost < best[vertex] {
            best[vertex] = cost;
        }
        on_path[vertex] = true;
        for (&next, weight) in graph.neighbors(&vertex) {
            if !on_path[next] {
                visit(graph, next, cost + weight, on_path, best);
            }
        }
        on_path[vertex] = false;
    }

    let n = graph.vertex_count();
    let mut best = vec![f64::INFINITY; n];
    let mut on_path = vec![false; n];
    visit(graph, source, 0.0, &mut on_path, &mut best);
    best
}

// Sum of the cheapest edge weights along consecutive vertices of a path
fn path_weight(graph: &AdjacencyGraph<usize, f64>, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(&pair[0])
                .filter(|(v, _)| **v == pair[1])
                .map(|(_, w)| w)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

// Test distances against exhaustive enumeration on small random graphs
#[test]
fn test_distances_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dijkstra = Dijkstra::new();

    for _ in 0..200 {
        let n = rng.gen_range(1..8);
        let mut graph = AdjacencyGraph::new();
        for v in 0..n {
            graph.add_vertex(v);
        }
        // Integer weights keep sums exact
        for _ in 0..rng.gen_range(0..(n * 3)) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let weight = rng.gen_range(0..10) as f64;
            graph.add_edge(u, v, weight, rng.gen_bool(0.3)).unwrap();
        }

        let source = rng.gen_range(0..n);
        let result = dijkstra.compute(&graph, &source).unwrap();
        let expected = brute_force_distances(&graph, source);

        for v in 0..n {
            assert_eq!(result.distances.get(&v), Some(expected[v]), "vertex {} from {}", v, source);
            if expected[v].is_infinite() {
                assert!(result.predecessors.get(&v).is_none());
            }
        }
    }
}

// Every reconstructed path must use existing edges and add up to the reported distance
#[test]
fn test_paths_are_consistent_with_distances() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random(&mut rng, 300, 3.0, 50.0);
    let result = Dijkstra::new().compute(&graph, &0).unwrap();

    for v in 0..graph.vertex_count() {
        match result.path_to(&v) {
            Some(path) => {
                assert_eq!(path.vertices[0], 0, "Path should start at source");
                assert_eq!(*path.vertices.last().unwrap(), v, "Path should end at target");
                assert!(path.vertices.len() <= graph.vertex_count());
                for pair in path.vertices.windows(2) {
                    assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
                }
                let total = path_weight(&graph, &path.vertices);
                assert!((total - path.weight).abs() < 1e-9);
            }
            None => assert!(!result.is_reachable(&v)),
        }
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);
    let result = Dijkstra::new().compute(&graph, &0).unwrap();

    // Manhattan distance on a unit grid
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(result.distance(&(y * 10 + x)), Some((x + y) as f64));
        }
    }

    let path = result.path_to(&99).unwrap();
    assert_eq!(path.vertices.len(), 19);
    assert_eq!(path.weight, 18.0);
}

// Test path finding around a wall with a single gap
#[test]
fn test_path_finding_with_obstacles() {
    let width = 10;
    let height = 10;
    let wall_x = 5;
    let gap_y = 9;

    let mut graph = AdjacencyGraph::new();
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            graph.add_vertex(vertex);
            if x == wall_x && y != gap_y {
                continue;
            }
            if x + 1 < width && !(x + 1 == wall_x && y != gap_y) {
                graph.add_undirected_edge(vertex, vertex + 1, 1.0).unwrap();
            }
            if y + 1 < height && !(x == wall_x && y + 1 != gap_y) {
                graph.add_undirected_edge(vertex, vertex + width, 1.0).unwrap();
            }
        }
    }

    let result = Dijkstra::new().compute(&graph, &0).unwrap();

    // Wall cells other than the gap are isolated
    assert!(!result.is_reachable(&wall_x));
    // Down to the gap row, across, and back up
    let target = 9;
    assert_eq!(result.distance(&target), Some(9.0 + 9.0 + 9.0));

    let path = result.path_to(&target).unwrap();
    assert!(path.vertices.contains(&(gap_y * width + wall_x)));
}

// Parallel multi-source runs share one graph and match single runs
#[test]
fn test_parallel_runs_match_sequential() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_geometric(&mut rng, 200, 0.15);
    let dijkstra = Dijkstra::new();
    let sources: Vec<usize> = (0..16).collect();

    let parallel = dijkstra.compute_many(&graph, &sources);
    for (source, result) in sources.iter().zip(parallel) {
        let sequential = dijkstra.compute(&graph, source).unwrap();
        assert_eq!(result.unwrap().distances, sequential.distances);
    }
}

// Undirected graphs give symmetric distances
#[test]
fn test_undirected_distances_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_geometric(&mut rng, 60, 0.3);
    let dijkstra = Dijkstra::new();

    let results: Vec<_> = (0..graph.vertex_count())
        .map(|s| dijkstra.compute(&graph, &s).unwrap())
        .collect();

    for a in 0..graph.vertex_count() {
        for b in 0..graph.vertex_count() {
            let ab = results[a].distances.get(&b).unwrap();
            let ba = results[b].distances.get(&a).unwrap();
            if ab.is_infinite() {
                assert!(ba.is_infinite());
            } else {
                assert!((ab - ba).abs() < 1e-9, "{} <-> {}", a, b);
            }
        }
    }
}
