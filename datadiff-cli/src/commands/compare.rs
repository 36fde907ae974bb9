//! Compare command - Row and field level diff of two JSON record files
//!
//! Loads both files as tables, compares them under the requested relaxations,
//! and prints either the aligned text report or JSON.

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use datadiff_core::exporter::{json, text};
use datadiff_core::{compare, CompareOptions, DiffResult};

use crate::input::load_table;
use crate::output::{OutputConfig, OutputFormat};

/// Run the compare command.
///
/// Returns whether the two files are equal under `options`.
pub fn run(
    expected: &Path,
    actual: &Path,
    name: &str,
    options: CompareOptions,
    config: &OutputConfig,
) -> anyhow::Result<bool> {
    let expected_table = load_table(expected, name).context("Failed to load expected records")?;
    let actual_table = load_table(actual, name)
        .context("Failed to load actual records")?
        .align_columns(&expected_table.columns)
        .with_context(|| {
            format!(
                "{} and {} do not hold the same fields",
                expected.display(),
                actual.display()
            )
        })?;

    tracing::info!(
        expected = %expected.display(),
        actual = %actual.display(),
        ignore_order = options.ignore_order,
        ignore_lengths = options.ignore_lengths,
        "Comparing"
    );

    let result = compare(&expected_table, &actual_table, options);
    println!("{}", render(&result, config)?);

    Ok(result.equal)
}

/// Render a diff result in the configured format.
pub fn render(result: &DiffResult, config: &OutputConfig) -> anyhow::Result<String> {
    match config.format {
        OutputFormat::Json => {
            json::render(result, &config.render_options()).context("Failed to serialize diff")
        }
        OutputFormat::Table => Ok(to_table(result, config)),
    }
}

fn to_table(result: &DiffResult, config: &OutputConfig) -> String {
    if !result.equal {
        return text::render(result, &config.render_options())
            .trim_end()
            .to_string();
    }

    let summary = result.summary();
    let ignored = summary.extra_expected + summary.extra_actual;
    let label = if config.color {
        "OK:".green().bold().to_string()
    } else {
        "OK:".to_string()
    };

    let mut output = format!(
        "{} {} {} rows equal",
        label, summary.matched, result.type_name
    );
    if ignored > 0 {
        output.push_str(&format!(
            " ({} extra ignored: {} expected, {} actual)",
            ignored, summary.extra_expected, summary.extra_actual
        ));
    }
    output
}
