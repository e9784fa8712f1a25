//! Array sorting command.

use anyhow::Result;

use algovis_common::ValueKind;
use algovis_core::sort::SortAlgorithm;
use algovis_engine::{display, Config, Workbench};

use crate::output::{self, Summary};
use crate::OutputFormat;

/// Run the sort command.
pub fn run(
    size: usize,
    kind: ValueKind,
    algorithm: SortAlgorithm,
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

    let mut values = bench.generate_values(size, kind);
    if show_values {
        output::status("Before:", quiet);
        output::status(&display::format_values(&values), quiet);
    }

    let timed = bench.sort_values(&mut values, algorithm);
    if show_values {
        output::status("After:", quiet);
        output::status(&display::format_values(&values), quiet);
    }

    Summary::new()
        .row("Algorithm", algorithm.name())
        .row("Kind", kind)
        .row("Size", size)
        .row("Elapsed", format!("{:?}", timed.elapsed))
        .print(format, quiet)
}
