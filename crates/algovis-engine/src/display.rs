//! Display-string rendering.
//!
//! Sequences render as comma-separated values with a periodic line break so
//! large arrays stay scannable in a text view. The break interval depends on
//! the value width: wide kinds wrap sooner.

use algovis_common::{Value, ValueKind};
use algovis_core::graph::{Graph, PathResult};

/// Values per line when rendering a sequence.
fn wrap_interval(kind: ValueKind) -> usize {
    match kind {
        ValueKind::Int => 100,
        ValueKind::Float => 80,
        ValueKind::Char => 150,
        ValueKind::Text => 50,
    }
}

/// Renders a homogeneous sequence, wrapping by kind.
///
/// An empty slice renders as an empty string.
#[must_use]
pub fn format_values(values: &[Value]) -> String {
    let Some(first) = values.first() else {
        return String::new();
    };
    let interval = wrap_interval(first.kind());
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        out.push_str(&value.to_string());
        if i + 1 < values.len() {
            if (i + 1) % interval == 0 {
                out.push('\n');
            } else {
                out.push_str(", ");
            }
        }
    }
    out
}

/// Renders a traversal sequence as `a -> b -> c`.
#[must_use]
pub fn format_traversal(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Renders a path result using the graph's vertex labels.
#[must_use]
pub fn format_path(result: &PathResult, graph: &Graph) -> String {
    if result.negative_cycle {
        return "negative cycle detected".to_owned();
    }
    if !result.found {
        return "no path".to_owned();
    }
    let route = result
        .path
        .iter()
        .map(|&v| graph.label(v))
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("{route} (distance {})", result.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algovis_common::ValueKind;
    use algovis_core::graph::PathAlgorithm;

    #[test]
    fn test_format_values_short() {
        let values: Vec<Value> = [3, 1, 2].map(Value::Int).to_vec();
        assert_eq!(format_values(&values), "3, 1, 2");
        assert_eq!(format_values(&[]), "");
    }

    #[test]
    fn test_format_values_wraps() {
        let values: Vec<Value> = (0..150).map(Value::Int).collect();
        let text = format_values(&values);
        // One break after the first 100 values, none at the end.
        assert_eq!(text.matches('\n').count(), 1);
        assert!(!text.ends_with('\n'));

        let floats: Vec<Value> = (0..160).map(|v| Value::Float(f64::from(v))).collect();
        assert_eq!(format_values(&floats).matches('\n').count(), 1);
    }

    #[test]
    fn test_format_traversal() {
        assert_eq!(format_traversal(&[5, 3, 8]), "5 -> 3 -> 8");
        assert_eq!(format_traversal(&[]), "");
    }

    #[test]
    fn test_format_path() {
        let mut graph = Graph::new(3, ValueKind::Char).unwrap();
        graph.add_edge(0, 1, 1.5).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        let result =
            algovis_core::graph::shortest_path(&graph, PathAlgorithm::Dijkstra, 0, 2).unwrap();
        assert_eq!(format_path(&result, &graph), "A -> B -> C (distance 2.5)");
    }

    #[test]
    fn test_format_path_not_found() {
        let graph = Graph::new(2, ValueKind::Int).unwrap();
        let result =
            algovis_core::graph::shortest_path(&graph, PathAlgorithm::Dijkstra, 0, 1).unwrap();
        assert_eq!(format_path(&result, &graph), "no path");
    }
}
