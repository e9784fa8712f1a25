//! Linked-list sorting command.

use anyhow::Result;

use algovis_common::{Value, ValueKind};
use algovis_core::list::ListSortAlgorithm;
use algovis_engine::{display, Config, Workbench};

use crate::output::{self, Summary};
use crate::OutputFormat;

/// Run the list command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    size: usize,
    kind: ValueKind,
    algorithm: ListSortAlgorithm,
    double: bool,
    show_values: bool,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut config = Config::new().with_default_kind(kind);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut bench = Workbench::new(config);

    let (layout, elapsed) = if double {
        let mut list = bench.random_double_list(kind, size);
        show(&list.iter().cloned().collect::<Vec<_>>(), "Before:", show_values, quiet);
        let timed = bench.sort_double_list(&mut list, algorithm);
        show(&list.iter().cloned().collect::<Vec<_>>(), "After:", show_values, quiet);
        ("double", timed.elapsed)
    } else {
        let mut list = bench.random_simple_list(kind, size);
        show(&list.iter().cloned().collect::<Vec<_>>(), "Before:", show_values, quiet);
        let timed = bench.sort_simple_list(&mut list, algorithm);
        show(&list.iter().cloned().collect::<Vec<_>>(), "After:", show_values, quiet);
        ("simple", timed.elapsed)
    };

    Summary::new()
        .row("Layout", layout)
        .row("Algorithm", algorithm.name())
        .row("Kind", kind)
        .row("Size", size)
        .row("Elapsed", format!("{elapsed:?}"))
        .print(format, quiet)
}

fn show(values: &[Value], label: &str, show_values: bool, quiet: bool) {
    if show_values {
        output::status(label, quiet);
        output::status(&display::format_values(values), quiet);
    }
}
