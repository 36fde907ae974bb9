//! Show command - Display a JSON record file as an extracted table

use std::path::Path;

use anyhow::Context;

use crate::input::load_table;
use crate::output::{OutputConfig, OutputFormat, TableOutput};

/// Run the show command.
pub fn run(path: &Path, name: &str, config: &OutputConfig) -> anyhow::Result<()> {
    let table = load_table(path, name).context("Failed to load records")?;

    let output = match config.format {
        OutputFormat::Table => TableOutput::format_table(&table, config),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&table).context("Failed to serialize table")?
        }
    };
    println!("{}", output);

    Ok(())
}
