//! Row classifications and the result structure for table diffs.

use serde::Serialize;

use crate::types::{Row, Value};

/// Outcome of comparing one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    /// Both sides present and every field equal.
    Match,
    /// Both sides present, at least one field differs.
    Mismatch,
    /// Present on one side only.
    Extra,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Match => "match",
            RowStatus::Mismatch => "mismatch",
            RowStatus::Extra => "extra",
        }
    }
}

/// Which input list a row came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Expected,
    Actual,
}

/// The classification of a single row.
///
/// Built only through the constructors below, which keep the shape
/// consistent with `status`: `mismatch` is present exactly for
/// [`RowStatus::Mismatch`], and an [`RowStatus::Extra`] row carries values
/// from one side only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowDiff {
    /// Position in the source list. For extras left over from the actual
    /// list this is the position in that list.
    pub index: usize,

    pub status: RowStatus,

    /// Values from the expected (first) list, if this row has a counterpart there
    pub expected: Option<Row>,

    /// Values from the actual (second) list, if this row has a counterpart there
    pub actual: Option<Row>,

    /// Per-column flags, `true` where the values differ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<Vec<bool>>,
}

impl RowDiff {
    pub fn matched(index: usize, expected: Row, actual: Row) -> Self {
        Self {
            index,
            status: RowStatus::Match,
            expected: Some(expected),
            actual: Some(actual),
            mismatch: None,
        }
    }

    pub fn mismatched(index: usize, expected: Row, actual: Row, mismatch: Vec<bool>) -> Self {
        Self {
            index,
            status: RowStatus::Mismatch,
            expected: Some(expected),
            actual: Some(actual),
            mismatch: Some(mismatch),
        }
    }

    pub fn extra(index: usize, side: Side, values: Row) -> Self {
        let (expected, actual) = match side {
            Side::Expected => (Some(values), None),
            Side::Actual => (None, Some(values)),
        };
        Self {
            index,
            status: RowStatus::Extra,
            expected,
            actual,
            mismatch: None,
        }
    }

    /// The side an extra row belongs to; `None` for paired rows.
    pub fn side(&self) -> Option<Side> {
        match (&self.expected, &self.actual) {
            (Some(_), None) => Some(Side::Expected),
            (None, Some(_)) => Some(Side::Actual),
            _ => None,
        }
    }

    /// Number of differing columns.
    pub fn mismatch_count(&self) -> usize {
        self.mismatch
            .as_ref()
            .map(|m| m.iter().filter(|&&differs| differs).count())
            .unwrap_or(0)
    }

    /// The values to show when a single line is rendered for this row.
    pub fn primary_values(&self) -> &[Value] {
        self.expected
            .as_deref()
            .or(self.actual.as_deref())
            .unwrap_or(&[])
    }
}

/// Row counts per outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub matched: usize,
    pub mismatched: usize,
    pub extra_expected: usize,
    pub extra_actual: usize,
}

impl DiffSummary {
    pub fn total_rows(&self) -> usize {
        self.matched + self.mismatched + self.extra_expected + self.extra_actual
    }
}

/// Complete result of comparing two tables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffResult {
    /// Verdict under the options the comparison ran with
    pub equal: bool,

    /// Canonical record type label
    pub type_name: String,

    /// Canonical column list; every mismatch vector has this length
    pub columns: Vec<String>,

    /// Row outcomes in emission order
    pub rows: Vec<RowDiff>,
}

impl DiffResult {
    pub fn new(type_name: String, columns: Vec<String>) -> Self {
        Self {
            equal: true,
            type_name,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn matched(&self) -> impl Iterator<Item = &RowDiff> {
        self.with_status(RowStatus::Match)
    }

    pub fn mismatched(&self) -> impl Iterator<Item = &RowDiff> {
        self.with_status(RowStatus::Mismatch)
    }

    pub fn extras(&self) -> impl Iterator<Item = &RowDiff> {
        self.with_status(RowStatus::Extra)
    }

    fn with_status(&self, status: RowStatus) -> impl Iterator<Item = &RowDiff> {
        self.rows.iter().filter(move |r| r.status == status)
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for row in &self.rows {
            match (row.status, row.side()) {
                (RowStatus::Match, _) => summary.matched += 1,
                (RowStatus::Mismatch, _) => summary.mismatched += 1,
                (RowStatus::Extra, Some(Side::Actual)) => summary.extra_actual += 1,
                (RowStatus::Extra, _) => summary.extra_expected += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_constructors_keep_shape() {
        let m = RowDiff::matched(0, row!["a"], row!["a"]);
        assert_eq!(m.status, RowStatus::Match);
        assert!(m.mismatch.is_none());
        assert_eq!(m.side(), None);

        let mm = RowDiff::mismatched(1, row!["a", 1], row!["a", 2], vec![false, true]);
        assert_eq!(mm.status, RowStatus::Mismatch);
        assert_eq!(mm.mismatch_count(), 1);

        let left = RowDiff::extra(2, Side::Expected, row!["x"]);
        assert!(left.expected.is_some() && left.actual.is_none());
        assert_eq!(left.side(), Some(Side::Expected));

        let right = RowDiff::extra(3, Side::Actual, row!["y"]);
        assert!(right.expected.is_none() && right.actual.is_some());
        assert_eq!(right.side(), Some(Side::Actual));
        assert_eq!(right.primary_values(), row!["y"].as_slice());
    }

    #[test]
    fn test_summary_counts() {
        let mut result = DiffResult::new("T".into(), vec!["c".into()]);
        result.rows = vec![
            RowDiff::matched(0, row![1], row![1]),
            RowDiff::mismatched(1, row![1], row![2], vec![true]),
            RowDiff::extra(2, Side::Expected, row![3]),
            RowDiff::extra(2, Side::Actual, row![4]),
            RowDiff::extra(3, Side::Actual, row![5]),
        ];

        let summary = result.summary();
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.mismatched, 1);
        assert_eq!(summary.extra_expected, 1);
        assert_eq!(summary.extra_actual, 2);
        assert_eq!(summary.total_rows(), 5);
        assert_eq!(result.extras().count(), 3);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&RowStatus::Mismatch).unwrap();
        assert_eq!(json, "\"mismatch\"");
        assert_eq!(RowStatus::Extra.as_str(), "extra");
    }
}
