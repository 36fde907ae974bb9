//! Comparator logic for diffing two tables row by row.

use tracing::debug;

use crate::differ::changes::{DiffResult, RowDiff, Side};
use crate::types::{Table, Value};

/// Relaxations applied during comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Match rows by best fit instead of by position.
    pub ignore_order: bool,
    /// Report extra rows without letting them fail the comparison.
    pub ignore_lengths: bool,
}

impl CompareOptions {
    pub fn new(ignore_order: bool, ignore_lengths: bool) -> Self {
        Self {
            ignore_order,
            ignore_lengths,
        }
    }
}

/// Compare two tables and classify every row.
///
/// The first table's name and columns are canonical; each falls back to the
/// second table's when empty. Names are otherwise ignored here, so callers
/// that care about record types must check them first.
pub fn compare(a: &Table, b: &Table, options: CompareOptions) -> DiffResult {
    let type_name = if a.name.is_empty() {
        b.name.clone()
    } else {
        a.name.clone()
    };
    let columns = if a.columns.is_empty() {
        b.columns.clone()
    } else {
        a.columns.clone()
    };

    let mut result = DiffResult::new(type_name, columns);

    if options.ignore_order {
        compare_unordered(&mut result, a, b, options.ignore_lengths);
    } else {
        compare_ordered(&mut result, a, b, options.ignore_lengths);
    }

    debug!(
        type_name = %result.type_name,
        ignore_order = options.ignore_order,
        ignore_lengths = options.ignore_lengths,
        equal = result.equal,
        summary = ?result.summary(),
        "Compared tables"
    );

    result
}

/// Position-based comparison: row `i` is paired with row `i`.
fn compare_ordered(result: &mut DiffResult, a: &Table, b: &Table, ignore_lengths: bool) {
    let column_count = result.columns.len();
    let limit = a.rows.len().min(b.rows.len());

    for i in 0..limit {
        let (mismatch, count) = field_mismatch(&a.rows[i], &b.rows[i], column_count);
        if count == 0 {
            result
                .rows
                .push(RowDiff::matched(i, a.rows[i].clone(), b.rows[i].clone()));
            continue;
        }

        result.equal = false;
        result.rows.push(RowDiff::mismatched(
            i,
            a.rows[i].clone(),
            b.rows[i].clone(),
            mismatch,
        ));
    }

    for (i, values) in a.rows.iter().enumerate().skip(limit) {
        push_extra(result, i, Side::Expected, values.clone(), ignore_lengths);
    }

    for (i, values) in b.rows.iter().enumerate().skip(limit) {
        push_extra(result, i, Side::Actual, values.clone(), ignore_lengths);
    }
}

/// Greedy best-fit comparison.
///
/// Each expected row, in order, claims the unclaimed actual row with the
/// fewest differing fields; the first candidate wins ties and a perfect
/// candidate ends the scan. This is not a minimum-cost assignment, so with
/// ambiguous near-duplicates an earlier row can take a candidate a later row
/// would have matched exactly.
fn compare_unordered(result: &mut DiffResult, a: &Table, b: &Table, ignore_lengths: bool) {
    let column_count = result.columns.len();

    // Unclaimed actual rows, tagged with their original position.
    let mut pool: Vec<(usize, &[Value])> = b
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| (i, row.as_slice()))
        .collect();

    for (i, row) in a.rows.iter().enumerate() {
        let Some((slot, mismatch, count)) = best_candidate(row, &pool, column_count) else {
            push_extra(result, i, Side::Expected, row.clone(), ignore_lengths);
            continue;
        };

        let (_, candidate) = pool.remove(slot);

        if count == 0 {
            result
                .rows
                .push(RowDiff::matched(i, row.clone(), candidate.to_vec()));
            continue;
        }

        result.equal = false;
        result.rows.push(RowDiff::mismatched(
            i,
            row.clone(),
            candidate.to_vec(),
            mismatch,
        ));
    }

    for (index, values) in pool {
        push_extra(result, index, Side::Actual, values.to_vec(), ignore_lengths);
    }
}

/// Scan the pool for the closest candidate to `row`.
///
/// Returns the pool slot, its mismatch vector and mismatch count, or `None`
/// when the pool is empty.
fn best_candidate(
    row: &[Value],
    pool: &[(usize, &[Value])],
    column_count: usize,
) -> Option<(usize, Vec<bool>, usize)> {
    let mut best: Option<(usize, Vec<bool>, usize)> = None;

    for (slot, (_, candidate)) in pool.iter().enumerate() {
        let (mismatch, count) = field_mismatch(row, candidate, column_count);
        if count == 0 {
            return Some((slot, mismatch, 0));
        }

        let better = best
            .as_ref()
            .map_or(true, |(_, _, best_count)| count < *best_count);
        if better {
            best = Some((slot, mismatch, count));
        }
    }

    best
}

fn push_extra(
    result: &mut DiffResult,
    index: usize,
    side: Side,
    values: Vec<Value>,
    ignore_lengths: bool,
) {
    result.rows.push(RowDiff::extra(index, side, values));
    if !ignore_lengths {
        result.equal = false;
    }
}

/// Compare two rows field by field over `column_count` columns.
///
/// Returns one flag per column (`true` where the values differ) and the
/// number of set flags. A column missing from either row always differs,
/// even when it is missing from both.
pub fn field_mismatch(a: &[Value], b: &[Value], column_count: usize) -> (Vec<bool>, usize) {
    let mut mismatch = vec![false; column_count];
    let mut count = 0;

    for (i, flag) in mismatch.iter_mut().enumerate() {
        let differs = match (a.get(i), b.get(i)) {
            (Some(left), Some(right)) => left != right,
            _ => true,
        };
        if differs {
            *flag = true;
            count += 1;
        }
    }

    (mismatch, count)
}
