//! Output formatting for the datadiff CLI.
//!
//! Two formats: table (human-readable) and json (machine-readable).
//! TTY detection decides colors and table width unless overridden.

use clap::ValueEnum;
use std::io::IsTerminal;
use std::str::FromStr;

use datadiff_core::RenderOptions;

mod table;

pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Emit ANSI colors
    pub color: bool,
    /// Width tables are fitted to; `None` leaves cells whole
    pub width: Option<usize>,
}

impl OutputConfig {
    /// Detect colors and table width from stdout.
    ///
    /// When output is not a TTY (piped or redirected), colors are off unless
    /// `color_override` is `Some(true)`, and cells are only truncated when an
    /// explicit `width` is given.
    pub fn detect(
        format: OutputFormat,
        color_override: Option<bool>,
        width: Option<usize>,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        Self {
            format,
            color: color_override.unwrap_or(is_tty),
            width: width.or_else(|| is_tty.then(terminal_width)),
        }
    }

    /// Options for the diff renderers in datadiff-core.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color,
            pretty_print: true,
        }
    }
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string to a maximum width with ellipsis
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{}...", truncated)
    }
}
