//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::OutputFormat;

/// An ordered set of labelled result values.
///
/// Commands build one per run and render it as a two-column table or a
/// JSON object depending on the selected format.
#[derive(Default)]
pub struct Summary {
    rows: Vec<(&'static str, String)>,
}

impl Summary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a labelled value.
    #[must_use]
    pub fn row(mut self, label: &'static str, value: impl ToString) -> Self {
        self.rows.push((label, value.to_string()));
        self
    }

    /// Prints the summary in the selected format; quiet mode prints nothing.
    pub fn print(self, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
        if quiet {
            return Ok(());
        }
        match format {
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = self
                    .rows
                    .into_iter()
                    .map(|(label, value)| (label.to_owned(), value.into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&object)?);
            }
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
                for (label, value) in self.rows {
                    table.add_row(vec![Cell::new(label).fg(Color::Green), Cell::new(value)]);
                }
                println!("{table}");
            }
        }
        Ok(())
    }
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}
