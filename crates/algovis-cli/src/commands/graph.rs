//! Shortest-path command.

use anyhow::{Context, Result};

use algovis_common::ValueKind;
use algovis_core::graph::{shortest_path, Graph, PathAlgorithm};
use algovis_engine::display;

use crate::output::Summary;
use crate::OutputFormat;

/// Run the graph command.
pub fn run(
    vertices: usize,
    edges: &[String],
    algorithm: PathAlgorithm,
    from: usize,
    to: usize,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut graph = Graph::new(vertices, ValueKind::Char)?;
    for spec in edges {
        let (from, to, weight) = parse_edge(spec)?;
        graph.add_edge(from, to, weight)?;
    }

    let result = shortest_path(&graph, algorithm, from, to)?;

    Summary::new()
        .row("Algorithm", algorithm.name())
        .row("Vertices", vertices)
        .row("Edges", graph.edge_count())
        .row(
            "Route",
            format!("{} -> {}", graph.label(from), graph.label(to)),
        )
        .row("Result", display::format_path(&result, &graph))
        .row("Elapsed", format!("{:?}", result.elapsed))
        .print(format, quiet)
}

/// Parses a `from:to:weight` triple.
fn parse_edge(spec: &str) -> Result<(usize, usize, f64)> {
    let mut parts = spec.splitn(3, ':');
    let mut next = |name: &str| {
        parts
            .next()
            .with_context(|| format!("missing {name} in `{spec}`, expected from:to:weight"))
    };
    let from = next("from")?
        .trim()
        .parse()
        .with_context(|| format!("invalid from-vertex in `{spec}`"))?;
    let to = next("to")?
        .trim()
        .parse()
        .with_context(|| format!("invalid to-vertex in `{spec}`"))?;
    let weight = next("weight")?
        .trim()
        .parse()
        .with_context(|| format!("invalid weight in `{spec}`"))?;
    Ok((from, to, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("0:1:2.5").unwrap(), (0, 1, 2.5));
        assert_eq!(parse_edge("3:4:-1").unwrap(), (3, 4, -1.0));
        assert!(parse_edge("0:1").is_err());
        assert!(parse_edge("x:1:2").is_err());
    }
}
