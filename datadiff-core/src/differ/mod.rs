//! Row-level diff engine for comparing two tables.
//!
//! Aligns two record lists and classifies every row as matched, mismatched
//! (with per-column flags), or extra.
//!
//! # Modes
//!
//! - **Ordered** (default): row `i` of one table is compared with row `i` of
//!   the other; trailing rows of the longer table are extras.
//! - **Unordered** (`ignore_order`): each expected row greedily claims the
//!   closest unclaimed actual row.
//! - **Length-insensitive** (`ignore_lengths`): extras are still reported but
//!   no longer fail the comparison. Combines with either mode above.
//!
//! # Example
//!
//! ```
//! use datadiff_core::{compare, row, CompareOptions, RowStatus, Table};
//!
//! let columns = vec!["Name".to_string(), "Age".to_string()];
//! let a = Table::new("Person", columns.clone()).with_rows(vec![row!["Alice", 30]]);
//! let b = Table::new("Person", columns).with_rows(vec![row!["Alice", 31]]);
//!
//! let result = compare(&a, &b, CompareOptions::default());
//! assert!(!result.equal);
//! assert_eq!(result.rows[0].status, RowStatus::Mismatch);
//! assert_eq!(result.rows[0].mismatch, Some(vec![false, true]));
//! ```

pub mod changes;
pub mod comparator;

pub use changes::{DiffResult, DiffSummary, RowDiff, RowStatus, Side};
pub use comparator::{compare, field_mismatch, CompareOptions};
