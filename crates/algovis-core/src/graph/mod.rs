//! Adjacency-matrix graph.
//!
//! A fixed-capacity undirected weighted graph backed by a dense matrix.
//! "No edge" is an explicit `None` rather than a sentinel weight, so
//! legitimately large weights are never ambiguous. The matrix is symmetric
//! and the diagonal is `Some(0.0)`; an edge exists iff `matrix[u][v]` is
//! `Some` and `u != v`. A separate edge list supports enumeration and is
//! kept consistent: weight updates rewrite the entry and removals compact
//! the list.

mod shortest_path;

pub use shortest_path::{shortest_path, PathAlgorithm, PathResult};

use serde::{Deserialize, Serialize};

use algovis_common::{Error, Result, Value, ValueKind};

/// Maximum number of vertices in a graph.
pub const MAX_VERTICES: usize = 50;

/// An undirected weighted edge, for enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint.
    pub from: usize,
    /// The other endpoint.
    pub to: usize,
    /// Edge weight.
    pub weight: f64,
}

/// A fixed-size undirected weighted graph.
#[derive(Debug, Clone)]
pub struct Graph {
    values: Vec<Value>,
    matrix: Vec<Vec<Option<f64>>>,
    edges: Vec<Edge>,
    kind: ValueKind,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Vertices are auto-assigned a default value by kind: sequential
    /// integers, sequential floats, letters `A`, `B`, …, or labels `S0`,
    /// `S1`, ….
    pub fn new(vertex_count: usize, kind: ValueKind) -> Result<Self> {
        if vertex_count == 0 || vertex_count > MAX_VERTICES {
            return Err(Error::InvalidVertexCount {
                requested: vertex_count,
                max: MAX_VERTICES,
            });
        }
        let values = (0..vertex_count)
            .map(|i| default_value(kind, i))
            .collect();
        let matrix = (0..vertex_count)
            .map(|i| {
                (0..vertex_count)
                    .map(|j| if i == j { Some(0.0) } else { None })
                    .collect()
            })
            .collect();
        Ok(Self {
            values,
            matrix,
            edges: Vec::new(),
            kind,
        })
    }

    /// Returns the configured vertex value kind.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds or updates the undirected edge between `u` and `v`.
    ///
    /// Both matrix directions are set. A new edge is appended to the edge
    /// list; updating an existing edge rewrites its list entry instead of
    /// duplicating it. Self-loops are no-ops.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Ok(());
        }
        if self.matrix[u][v].is_none() {
            self.edges.push(Edge {
                from: u,
                to: v,
                weight,
            });
        } else if let Some(edge) = self
            .edges
            .iter_mut()
            .find(|e| (e.from == u && e.to == v) || (e.from == v && e.to == u))
        {
            edge.weight = weight;
        }
        self.matrix[u][v] = Some(weight);
        self.matrix[v][u] = Some(weight);
        Ok(())
    }

    /// Removes the edge between `u` and `v`, compacting the edge list.
    /// Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Ok(());
        }
        self.matrix[u][v] = None;
        self.matrix[v][u] = None;
        self.edges
            .retain(|e| !((e.from == u && e.to == v) || (e.from == v && e.to == u)));
        Ok(())
    }

    /// Returns true if an edge connects `u` and `v`. Out-of-range indices
    /// and the diagonal report `false`.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u != v
            && u < self.vertex_count()
            && v < self.vertex_count()
            && self.matrix[u][v].is_some()
    }

    /// Returns the weight between `u` and `v`: `Some(0.0)` on the diagonal,
    /// `None` when no edge exists or an index is out of range.
    #[must_use]
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        if u < self.vertex_count() && v < self.vertex_count() {
            self.matrix[u][v]
        } else {
            None
        }
    }

    /// Replaces the value attached to a vertex.
    pub fn set_vertex_value(&mut self, vertex: usize, value: Value) -> Result<()> {
        self.check_vertex(vertex)?;
        debug_assert_eq!(value.kind(), self.kind);
        self.values[vertex] = value;
        Ok(())
    }

    /// Returns the value attached to a vertex.
    #[must_use]
    pub fn vertex_value(&self, vertex: usize) -> Option<&Value> {
        self.values.get(vertex)
    }

    /// Renders the display label for a vertex; empty for an out-of-range
    /// index. Float labels use one decimal.
    #[must_use]
    pub fn label(&self, vertex: usize) -> String {
        match self.values.get(vertex) {
            Some(Value::Float(v)) => format!("{v:.1}"),
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }

    /// Iterates over the edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Iterates over `(neighbor, weight)` pairs for a vertex.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.matrix
            .get(vertex)
            .into_iter()
            .flat_map(move |row| {
                row.iter().enumerate().filter_map(move |(other, weight)| {
                    if other == vertex {
                        None
                    } else {
                        weight.map(|w| (other, w))
                    }
                })
            })
    }

    /// Removes every edge, keeping the vertices and their values.
    pub fn reset_edges(&mut self) {
        let n = self.vertex_count();
        for i in 0..n {
            for j in 0..n {
                self.matrix[i][j] = if i == j { Some(0.0) } else { None };
            }
        }
        self.edges.clear();
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertices: self.vertex_count(),
            })
        }
    }
}

fn default_value(kind: ValueKind, index: usize) -> Value {
    match kind {
        ValueKind::Int => Value::Int(index as i64),
        ValueKind::Float => Value::Float(index as f64),
        ValueKind::Char => Value::Char((b'A' + (index % 26) as u8) as char),
        ValueKind::Text => Value::Text(format!("S{index}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bounds() {
        assert!(Graph::new(0, ValueKind::Int).is_err());
        assert!(Graph::new(MAX_VERTICES + 1, ValueKind::Int).is_err());
        let graph = Graph::new(5, ValueKind::Int).unwrap();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_default_values() {
        let ints = Graph::new(3, ValueKind::Int).unwrap();
        assert_eq!(ints.label(2), "2");

        let chars = Graph::new(3, ValueKind::Char).unwrap();
        assert_eq!(chars.label(0), "A");
        assert_eq!(chars.label(2), "C");

        let floats = Graph::new(3, ValueKind::Float).unwrap();
        assert_eq!(floats.label(1), "1.0");

        let texts = Graph::new(3, ValueKind::Text).unwrap();
        assert_eq!(texts.label(2), "S2");

        assert_eq!(ints.label(99), "");
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut graph = Graph::new(4, ValueKind::Int).unwrap();
        graph.add_edge(0, 1, 2.5).unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert_eq!(graph.weight(0, 1), Some(2.5));
        assert_eq!(graph.weight(1, 0), Some(2.5));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_update_edge_weight_no_duplicate() {
        let mut graph = Graph::new(4, ValueKind::Int).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 0, 9.0).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(0, 1), Some(9.0));
        assert_eq!(graph.edges().next().unwrap().weight, 9.0);
    }

    #[test]
    fn test_remove_edge_compacts() {
        let mut graph = Graph::new(4, ValueKind::Int).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        graph.remove_edge(1, 0).unwrap();
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.weight(0, 1), None);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().next().unwrap().from, 1);
    }

    #[test]
    fn test_self_loop_is_noop() {
        let mut graph = Graph::new(3, ValueKind::Int).unwrap();
        graph.add_edge(1, 1, 5.0).unwrap();
        assert!(!graph.has_edge(1, 1));
        assert_eq!(graph.weight(1, 1), Some(0.0));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_vertex_bounds() {
        let mut graph = Graph::new(3, ValueKind::Int).unwrap();
        assert!(graph.add_edge(0, 7, 1.0).is_err());
        assert!(graph.remove_edge(7, 0).is_err());
        assert!(!graph.has_edge(0, 7));
        assert_eq!(graph.weight(7, 0), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_set_vertex_value() {
        let mut graph = Graph::new(3, ValueKind::Int).unwrap();
        graph.set_vertex_value(1, Value::Int(42)).unwrap();
        assert_eq!(graph.vertex_value(1), Some(&Value::Int(42)));
        assert_eq!(graph.label(1), "42");
        assert!(graph.set_vertex_value(5, Value::Int(0)).is_err());
    }

    #[test]
    fn test_neighbors() {
        let mut graph = Graph::new(4, ValueKind::Int).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 3, 3.0).unwrap();
        let neighbors: Vec<_> = graph.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 1.0), (3, 3.0)]);
        assert_eq!(graph.neighbors(2).count(), 0);
    }

    #[test]
    fn test_reset_edges() {
        let mut graph = Graph::new(3, ValueKind::Char).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.set_vertex_value(0, Value::Char('Z')).unwrap();
        graph.reset_edges();
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.label(0), "Z");
    }
}
