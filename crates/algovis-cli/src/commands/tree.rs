//! Tree commands.

use anyhow::{bail, Context, Result};

use algovis_core::tree::{BinaryTree, NaryTree, TraversalOrder};
use algovis_engine::display;

use crate::output::{self, Summary};
use crate::{OutputFormat, TreeCommands};

/// Run a tree command.
pub fn run(cmd: TreeCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match cmd {
        TreeCommands::Bst { values, order } => run_bst(&values, order.into(), format, quiet),
        TreeCommands::Nary {
            root,
            nodes,
            order,
            to_binary,
        } => run_nary(root, &nodes, order.into(), to_binary, format, quiet),
    }
}

fn run_bst(
    values: &[i64],
    order: TraversalOrder,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if values.is_empty() {
        bail!("at least one value is required");
    }

    let mut tree = BinaryTree::new();
    let mut duplicates = 0usize;
    for &value in values {
        if !tree.insert(value) {
            duplicates += 1;
        }
    }

    Summary::new()
        .row("Nodes", tree.len())
        .row("Duplicates skipped", duplicates)
        .row("Height", tree.height())
        .row("Traversal", display::format_traversal(&tree.traverse(order)))
        .print(format, quiet)
}

fn run_nary(
    root: i64,
    nodes: &[String],
    order: algovis_core::tree::NaryTraversal,
    to_binary: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut tree = NaryTree::new();
    tree.insert(root, 0);
    for spec in nodes {
        let (parent, child) = parse_node(spec)?;
        if !tree.insert(child, parent) {
            bail!("parent {parent} not found for node {child}");
        }
    }

    Summary::new()
        .row("Nodes", tree.len())
        .row("Height", tree.height())
        .row("Traversal", display::format_traversal(&tree.traverse(order)))
        .print(format, quiet)?;

    if to_binary {
        let binary = tree.to_binary();
        output::status("Converted (first-child/next-sibling):", quiet);
        Summary::new()
            .row("Height", binary.height())
            .row(
                "Pre-order",
                display::format_traversal(&binary.traverse(TraversalOrder::PreOrder)),
            )
            .row(
                "In-order",
                display::format_traversal(&binary.traverse(TraversalOrder::InOrder)),
            )
            .print(format, quiet)?;
    }

    Ok(())
}

/// Parses a `parent:child` pair.
fn parse_node(spec: &str) -> Result<(i64, i64)> {
    let (parent, child) = spec
        .split_once(':')
        .with_context(|| format!("expected parent:child, got `{spec}`"))?;
    let parent = parent
        .trim()
        .parse()
        .with_context(|| format!("invalid parent in `{spec}`"))?;
    let child = child
        .trim()
        .parse()
        .with_context(|| format!("invalid child in `{spec}`"))?;
    Ok((parent, child))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node() {
        assert_eq!(parse_node("1:2").unwrap(), (1, 2));
        assert_eq!(parse_node(" 3 : -4 ").unwrap(), (3, -4));
        assert!(parse_node("12").is_err());
        assert!(parse_node("a:2").is_err());
    }
}
