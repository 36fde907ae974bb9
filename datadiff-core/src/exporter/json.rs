//! JSON format exporter.

use serde::Serialize;

use super::RenderOptions;
use crate::differ::{DiffResult, DiffSummary};

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a DiffResult,
    summary: DiffSummary,
}

/// Export a diff result, with row counts, to JSON.
pub fn render(result: &DiffResult, options: &RenderOptions) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        result,
        summary: result.summary(),
    };
    if options.pretty_print {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}
