//! datadiff core - tabular diffs for record collections.
//!
//! This crate compares two ordered lists of structurally identical records and
//! reports *why* they differ: which rows match, which differ and in which
//! fields, and which have no counterpart. It is meant for test assertions
//! where "the vectors are not equal" is not enough.
//!
//! # Features
//!
//! - **Ordered or best-fit alignment**: compare by position, or let each
//!   expected row claim its closest actual row
//! - **Field-level mismatches**: per-column flags for every differing row
//! - **Length tolerance**: report extra rows without failing on them
//! - **Readable reports**: aligned, colored text tables or JSON
//!
//! # Usage
//!
//! ```
//! use datadiff_core::{check, tabular, Flag};
//!
//! #[derive(Clone)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! tabular!(Person { name, age });
//!
//! let expected = vec![Person { name: "Alice".into(), age: 30 }];
//! let actual = vec![Person { name: "Alice".into(), age: 31 }];
//!
//! let err = check(&expected, &actual, &[]).unwrap_err();
//! assert!(err.to_string().contains("are not equal"));
//! assert!(check(&expected, &expected, &[Flag::IgnoreOrder]).is_ok());
//! ```

pub mod assert;
pub mod differ;
pub mod error;
pub mod exporter;
pub mod tabular;
pub mod types;

pub use assert::{check, check_tables, check_tables_with, Flag};
pub use differ::{
    compare, field_mismatch, CompareOptions, DiffResult, DiffSummary, RowDiff, RowStatus, Side,
};
pub use error::{Argument, AssertError, ExtractError, Result};
pub use exporter::RenderOptions;
pub use tabular::Tabular;
pub use types::{Row, Table, Value};

/// Get the version of datadiff-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
