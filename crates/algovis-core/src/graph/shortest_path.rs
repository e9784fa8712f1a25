//! Shortest-path algorithms over the adjacency-matrix graph.
//!
//! Three single-pair solvers sharing one result shape: Dijkstra for
//! non-negative weights, Bellman-Ford with negative-cycle detection, and
//! Floyd-Warshall with successor-table path reconstruction. Each measures
//! its own wall-clock time; the measurement is informational and not part
//! of the algorithmic contract.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use algovis_common::{Error, Result};

use crate::graph::Graph;

/// Which shortest-path algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathAlgorithm {
    /// Array-based single-source Dijkstra, O(V²). Assumes non-negative
    /// weights.
    Dijkstra,
    /// Bellman-Ford with early exit and negative-cycle detection.
    BellmanFord,
    /// All-pairs Floyd-Warshall, O(V³), with path reconstruction.
    FloydWarshall,
}

impl PathAlgorithm {
    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PathAlgorithm::Dijkstra => "dijkstra",
            PathAlgorithm::BellmanFord => "bellman-ford",
            PathAlgorithm::FloydWarshall => "floyd-warshall",
        }
    }
}

/// Outcome of a shortest-path run.
///
/// `distance` and `path` are meaningful only when `found` is true. A
/// negative cycle suppresses both and sets `negative_cycle` (only
/// Bellman-Ford and Floyd-Warshall can detect one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Whether a path from start to end exists.
    pub found: bool,
    /// Total path distance.
    pub distance: f64,
    /// Vertex indices from start to end inclusive.
    pub path: Vec<usize>,
    /// Wall-clock time spent inside the algorithm.
    pub elapsed: Duration,
    /// Whether a negative-weight cycle was detected.
    pub negative_cycle: bool,
}

impl PathResult {
    fn not_found() -> Self {
        Self {
            found: false,
            distance: 0.0,
            path: Vec::new(),
            elapsed: Duration::ZERO,
            negative_cycle: false,
        }
    }
}

/// Runs the chosen algorithm between `start` and `end`.
pub fn shortest_path(
    graph: &Graph,
    algorithm: PathAlgorithm,
    start: usize,
    end: usize,
) -> Result<PathResult> {
    match algorithm {
        PathAlgorithm::Dijkstra => dijkstra(graph, start, end),
        PathAlgorithm::BellmanFord => bellman_ford(graph, start, end),
        PathAlgorithm::FloydWarshall => floyd_warshall(graph, start, end),
    }
}

/// Array-based Dijkstra.
///
/// Each round selects the unvisited vertex with the smallest known distance
/// (strict `<` scan, so the lowest index wins ties) and relaxes its
/// neighbors. Stops early once the target is selected or nothing reachable
/// remains.
pub fn dijkstra(graph: &Graph, start: usize, end: usize) -> Result<PathResult> {
    check_endpoints(graph, start, end)?;
    let started = Instant::now();
    let n = graph.vertex_count();

    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[start] = Some(0.0);

    for _ in 0..n {
        let mut nearest: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            if let Some(d) = dist[i] {
                if nearest.is_none_or(|(_, best)| d < best) {
                    nearest = Some((i, d));
                }
            }
        }
        let Some((u, d)) = nearest else { break };
        if u == end {
            break;
        }
        visited[u] = true;

        for (v, w) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = d + w;
            if dist[v].is_none_or(|current| candidate < current) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
            }
        }
    }

    let mut result = match dist[end] {
        Some(distance) => PathResult {
            found: true,
            distance,
            path: walk_back(&prev, start, end),
            elapsed: Duration::ZERO,
            negative_cycle: false,
        },
        None => PathResult::not_found(),
    };
    result.elapsed = started.elapsed();
    Ok(result)
}

/// Bellman-Ford over every directed matrix entry.
///
/// Relaxes all edges up to V−1 times, stopping early after a clean round.
/// One extra pass detects a negative cycle; if found, the flag is set and
/// no path is reported.
pub fn bellman_ford(graph: &Graph, start: usize, end: usize) -> Result<PathResult> {
    check_endpoints(graph, start, end)?;
    let started = Instant::now();
    let n = graph.vertex_count();

    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start] = Some(0.0);

    for _ in 1..n {
        let mut updated = false;
        for u in 0..n {
            let Some(du) = dist[u] else { continue };
            for (v, w) in graph.neighbors(u) {
                let candidate = du + w;
                if dist[v].is_none_or(|current| candidate < current) {
                    dist[v] = Some(candidate);
                    prev[v] = Some(u);
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    // A further improving relaxation means a reachable negative cycle.
    for u in 0..n {
        let Some(du) = dist[u] else { continue };
        for (v, w) in graph.neighbors(u) {
            if dist[v].is_none_or(|current| du + w < current) {
                debug!(u, v, "negative cycle detected");
                let mut result = PathResult::not_found();
                result.negative_cycle = true;
                result.elapsed = started.elapsed();
                return Ok(result);
            }
        }
    }

    let mut result = match dist[end] {
        Some(distance) => PathResult {
            found: true,
            distance,
            path: walk_back(&prev, start, end),
            elapsed: Duration::ZERO,
            negative_cycle: false,
        },
        None => PathResult::not_found(),
    };
    result.elapsed = started.elapsed();
    Ok(result)
}

/// Floyd-Warshall with a successor table.
///
/// Runs the full all-pairs relaxation, then answers the single requested
/// pair. A negative diagonal entry after relaxation means a negative cycle.
/// Reconstruction follows `next` from start toward end, bounded by the
/// vertex count; a broken or non-terminating chain yields `found = false`.
pub fn floyd_warshall(graph: &Graph, start: usize, end: usize) -> Result<PathResult> {
    check_endpoints(graph, start, end)?;
    let started = Instant::now();
    let n = graph.vertex_count();

    let mut dist: Vec<Vec<Option<f64>>> = (0..n)
        .map(|i| (0..n).map(|j| graph.weight(i, j)).collect())
        .collect();
    let mut next: Vec<Vec<Option<usize>>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i != j && graph.weight(i, j).is_some() {
                        Some(j)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();

    for k in 0..n {
        for i in 0..n {
            let Some(dik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(dkj) = dist[k][j] else { continue };
                let candidate = dik + dkj;
                if dist[i][j].is_none_or(|current| candidate < current) {
                    dist[i][j] = Some(candidate);
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    for i in 0..n {
        if dist[i][i].is_some_and(|d| d < 0.0) {
            debug!(vertex = i, "negative cycle detected");
            let mut result = PathResult::not_found();
            result.negative_cycle = true;
            result.elapsed = started.elapsed();
            return Ok(result);
        }
    }

    let mut result = match dist[start][end] {
        Some(distance) => match follow_next(&next, start, end) {
            Some(path) => PathResult {
                found: true,
                distance,
                path,
                elapsed: Duration::ZERO,
                negative_cycle: false,
            },
            None => PathResult::not_found(),
        },
        None => PathResult::not_found(),
    };
    result.elapsed = started.elapsed();
    Ok(result)
}

/// Follows the successor table from `start` toward `end`.
///
/// A well-formed table reaches `end` in fewer than vertex-count steps.
/// Returns `None` if a link is missing or the chain fails to terminate
/// within that bound, so a malformed table can never yield a bogus path.
fn follow_next(next: &[Vec<Option<usize>>], start: usize, end: usize) -> Option<Vec<usize>> {
    let n = next.len();
    let mut path = vec![start];
    let mut current = start;
    while current != end {
        if path.len() >= n {
            return None;
        }
        current = next[current][end]?;
        path.push(current);
    }
    Some(path)
}

fn check_endpoints(graph: &Graph, start: usize, end: usize) -> Result<()> {
    for vertex in [start, end] {
        if vertex >= graph.vertex_count() {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertices: graph.vertex_count(),
            });
        }
    }
    Ok(())
}

/// Rebuilds the start→end path by walking predecessor links backwards.
fn walk_back(prev: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(vertex) = current {
        path.push(vertex);
        if vertex == start {
            break;
        }
        current = prev[vertex];
    }
    path.reverse();
    path
}
