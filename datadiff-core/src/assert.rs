//! Assertion entry points for test suites.
//!
//! These wire extraction, comparison and rendering together: inputs are
//! normalized into tables, record types are checked, the tables are compared,
//! and a failing comparison is returned as [`AssertError::NotEqual`] carrying
//! the rendered report.
//!
//! ```
//! use datadiff_core::{assert_data_eq, tabular, Flag};
//!
//! #[derive(Clone)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! tabular!(Person { name, age });
//!
//! let expected = vec![
//!     Person { name: "Alice".into(), age: 30 },
//!     Person { name: "Bob".into(), age: 25 },
//! ];
//! let actual = vec![
//!     Person { name: "Bob".into(), age: 25 },
//!     Person { name: "Alice".into(), age: 30 },
//! ];
//!
//! assert_data_eq!(expected, actual, Flag::IgnoreOrder);
//! ```

use crate::differ::{compare, CompareOptions, DiffResult};
use crate::error::{Argument, AssertError, Result};
use crate::exporter::{text, RenderOptions};
use crate::tabular::Tabular;
use crate::types::Table;

/// Relaxations accepted by the assertion entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// Match rows by closest counterpart instead of by position.
    IgnoreOrder,
    /// Report extra rows without failing on them.
    IgnoreLengths,
}

impl CompareOptions {
    /// Fold assertion flags into comparison options. Repeated flags are harmless.
    pub fn from_flags(flags: &[Flag]) -> Self {
        let mut options = CompareOptions::default();
        for flag in flags {
            match flag {
                Flag::IgnoreOrder => options.ignore_order = true,
                Flag::IgnoreLengths => options.ignore_lengths = true,
            }
        }
        options
    }
}

/// Compare two already-normalized tables.
///
/// Tables whose names are both non-empty and different are rejected before
/// any comparison runs. On success the (equal) diff result is returned.
pub fn check_tables(expected: &Table, actual: &Table, flags: &[Flag]) -> Result<DiffResult> {
    check_tables_with(expected, actual, flags, &RenderOptions::default())
}

/// [`check_tables`] with explicit rendering options for the failure report.
pub fn check_tables_with(
    expected: &Table,
    actual: &Table,
    flags: &[Flag],
    render: &RenderOptions,
) -> Result<DiffResult> {
    if !expected.name.is_empty() && !actual.name.is_empty() && expected.name != actual.name {
        return Err(AssertError::TypeMismatch {
            expected: expected.name.clone(),
            actual: actual.name.clone(),
        });
    }

    let result = compare(expected, actual, CompareOptions::from_flags(flags));
    if !result.equal {
        return Err(AssertError::NotEqual {
            report: text::render(&result, render),
        });
    }

    Ok(result)
}

/// Compare two record slices.
///
/// Extraction failures are labelled with the argument they came from.
pub fn check<A: Tabular, B: Tabular>(
    expected: &[A],
    actual: &[B],
    flags: &[Flag],
) -> Result<DiffResult> {
    let expected = Table::from_records(expected).map_err(|source| AssertError::Extract {
        argument: Argument::First,
        source,
    })?;
    let actual = Table::from_records(actual).map_err(|source| AssertError::Extract {
        argument: Argument::Second,
        source,
    })?;

    check_tables(&expected, &actual, flags)
}

/// Assert that two record collections are equal, panicking with a tabular
/// diff report otherwise.
///
/// Accepts anything that derefs to a slice of [`Tabular`] records, followed
/// by any number of [`Flag`]s.
#[macro_export]
macro_rules! assert_data_eq {
    ($expected:expr, $actual:expr $(, $flag:expr)* $(,)?) => {
        if let Err(err) = $crate::check(&$expected[..], &$actual[..], &[$($flag),*]) {
            panic!("{}", err);
        }
    };
}
