//! Error types for datadiff-core.
//!
//! The comparison engine itself cannot fail; these cover the steps around it
//! (turning inputs into tables, and the assertion boundary).

use thiserror::Error;

/// Result type alias for datadiff operations.
pub type Result<T> = std::result::Result<T, AssertError>;

/// Errors produced while normalizing an input into a [`crate::Table`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The input was null/absent.
    #[error("datadiff: input is nil")]
    NullInput,

    /// The input was not a list of records.
    #[error("datadiff: expected array, got {found}")]
    NotAnArray {
        /// Kind of value that was found instead.
        found: String,
    },

    /// A list element was not a record.
    #[error("datadiff: expected array of records, element {index} is {found}")]
    NotARecord {
        /// Position of the offending element.
        index: usize,
        /// Kind of value that was found instead.
        found: String,
    },

    /// A record's field set differs from the first record's.
    #[error("datadiff: element {index} does not have the same fields as element 0")]
    Heterogeneous {
        /// Position of the offending element.
        index: usize,
    },

    /// The record type has nothing to compare.
    #[error("datadiff: {type_name} has no fields")]
    NoColumns {
        /// Label of the record type.
        type_name: String,
    },

    /// Two tables describe different field sets, so rows cannot be lined up.
    #[error("datadiff: fields differ: [{expected}] vs [{actual}]")]
    ColumnMismatch {
        /// Comma-separated columns of the reference table.
        expected: String,
        /// Comma-separated columns of the table being aligned.
        actual: String,
    },
}

/// Which side of an assertion an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    First,
    Second,
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::First => f.write_str("first argument"),
            Argument::Second => f.write_str("second argument"),
        }
    }
}

/// Errors reported by the assertion entry point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssertError {
    /// One of the inputs could not be turned into a table.
    #[error("datadiff: {argument}: {source}")]
    Extract {
        argument: Argument,
        #[source]
        source: ExtractError,
    },

    /// The two inputs are different record types.
    #[error("datadiff: type mismatch: []{expected} vs []{actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The tables differ; `report` holds the rendered diff.
    #[error("\n{report}")]
    NotEqual { report: String },
}

impl AssertError {
    /// Whether this is a data discrepancy rather than an input problem.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, AssertError::NotEqual { .. })
    }
}
