//! Table output formatting using the `tabled` crate

use super::{truncate, OutputConfig};
use datadiff_core::Table;
use tabled::{
    builder::Builder,
    settings::{style::Style, Width},
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Format an extracted table with a leading row-index column.
    pub fn format_table(table: &Table, config: &OutputConfig) -> String {
        if table.columns.is_empty() {
            return "(no rows)".to_string();
        }

        let mut builder = Builder::default();

        let mut header = vec!["#".to_string()];
        header.extend(table.columns.iter().cloned());
        builder.push_record(header);

        let col_count = table.columns.len() + 1;
        let max_cell = config
            .width
            .map(|w| (w.saturating_sub(col_count * 3) / col_count).max(4));

        for (i, row) in table.rows.iter().enumerate() {
            let mut record = vec![i.to_string()];
            for c in 0..table.columns.len() {
                let text = row.get(c).map(|v| v.to_string()).unwrap_or_default();
                match max_cell {
                    Some(max) => record.push(truncate(&text, max)),
                    None => record.push(text),
                }
            }
            builder.push_record(record);
        }

        let mut rendered = builder.build();
        rendered.with(Style::rounded());

        if let Some(width) = config.width {
            rendered.with(Width::wrap(width));
        }

        format!("{}\n{} rows", rendered, table.len())
    }
}
