//! Renderers that turn a [`DiffResult`](crate::DiffResult) into a report.
//!
//! - [`text`]: aligned, optionally colored table for terminals and test output
//! - [`json`]: machine-readable result with a summary block

pub mod json;
pub mod text;

/// Options shared by the renderers.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Highlight markers and differing cells with ANSI colors.
    pub color: bool,
    /// Pretty-print JSON output.
    pub pretty_print: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            pretty_print: true,
        }
    }
}

impl RenderOptions {
    /// Builder: disable colors
    pub fn without_colors(mut self) -> Self {
        self.color = false;
        self
    }

    /// Builder: compact JSON
    pub fn compact(mut self) -> Self {
        self.pretty_print = false;
        self
    }
}
