//! Plain-text diff report.
//!
//! Layout, one table line per entry:
//!
//! ```text
//! datadiff: []Person are not equal
//!
//!      #  Name   Age
//!  -   -  -      -
//!  ✓   0  Alice  30
//!  ✗   1  Bob    25   ← expected
//!         Bob    26   ← actual
//!  +   2  Eve    40   ← extra in expected
//! ```

use colored::Colorize;
use tabled::{builder::Builder, settings::Style};

use super::RenderOptions;
use crate::differ::{DiffResult, RowStatus, Side};
use crate::types::Value;

const MARK_MATCH: &str = "✓";
const MARK_MISMATCH: &str = "✗";
const MARK_EXTRA: &str = "+";

const NOTE_EXPECTED: &str = "← expected";
const NOTE_ACTUAL: &str = "← actual";
const NOTE_EXTRA_EXPECTED: &str = "← extra in expected";
const NOTE_EXTRA_ACTUAL: &str = "← extra in actual";

/// Render a diff result as an aligned text table.
///
/// Returns an empty string when the result is equal.
pub fn render(result: &DiffResult, options: &RenderOptions) -> String {
    if result.equal {
        return String::new();
    }

    let painter = Painter {
        color: options.color,
    };
    let column_count = result.columns.len();
    let mut builder = Builder::default();

    let mut header = vec![String::new(), "#".to_string()];
    header.extend(result.columns.iter().cloned());
    header.push(String::new());
    builder.push_record(header);

    let mut separator = vec!["-".to_string(); column_count + 2];
    separator.push(String::new());
    builder.push_record(separator);

    for diff in &result.rows {
        let index = diff.index.to_string();
        match diff.status {
            RowStatus::Match => {
                builder.push_record(line(
                    painter.green(MARK_MATCH),
                    index,
                    diff.primary_values(),
                    None,
                    column_count,
                    "",
                    &painter,
                ));
            }
            RowStatus::Mismatch => {
                let mismatch = diff.mismatch.as_deref();
                builder.push_record(line(
                    painter.red(MARK_MISMATCH),
                    index,
                    diff.expected.as_deref().unwrap_or(&[]),
                    mismatch,
                    column_count,
                    NOTE_EXPECTED,
                    &painter,
                ));
                builder.push_record(line(
                    String::new(),
                    String::new(),
                    diff.actual.as_deref().unwrap_or(&[]),
                    mismatch,
                    column_count,
                    NOTE_ACTUAL,
                    &painter,
                ));
            }
            RowStatus::Extra => {
                let note = match diff.side() {
                    Some(Side::Actual) => NOTE_EXTRA_ACTUAL,
                    _ => NOTE_EXTRA_EXPECTED,
                };
                builder.push_record(line(
                    painter.yellow(MARK_EXTRA),
                    index,
                    diff.primary_values(),
                    None,
                    column_count,
                    note,
                    &painter,
                ));
            }
        }
    }

    let mut table = builder.build();
    table.with(Style::blank());

    format!(
        "datadiff: []{} are not equal\n\n{}\n",
        result.type_name, table
    )
}

/// Build one table line: marker, index, one cell per column, note.
///
/// Cells past the end of `values` stay empty; flagged cells are painted red.
fn line(
    marker: String,
    index: String,
    values: &[Value],
    mismatch: Option<&[bool]>,
    column_count: usize,
    note: &str,
    painter: &Painter,
) -> Vec<String> {
    let mut cells = Vec::with_capacity(column_count + 3);
    cells.push(marker);
    cells.push(index);

    for i in 0..column_count {
        let cell = match values.get(i) {
            Some(value) => {
                let text = value.to_string();
                let differs = mismatch.and_then(|m| m.get(i)).copied().unwrap_or(false);
                if differs {
                    painter.red(&text)
                } else {
                    text
                }
            }
            None => String::new(),
        };
        cells.push(cell);
    }

    cells.push(note.to_string());
    cells
}

struct Painter {
    color: bool,
}

impl Painter {
    fn red(&self, s: &str) -> String {
        if self.color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn green(&self, s: &str) -> String {
        if self.color {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }
}
