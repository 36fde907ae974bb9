//! Integration tests for the public assertion API.

use datadiff_core::{assert_data_eq, check, tabular, AssertError, Flag, RowStatus};

#[derive(Clone, Debug)]
struct Order {
    id: u32,
    customer: String,
    items: Vec<String>,
    discount: Option<f64>,
}

tabular!(Order {
    id,
    customer,
    items,
    discount,
});

fn order(id: u32, customer: &str, items: &[&str], discount: Option<f64>) -> Order {
    Order {
        id,
        customer: customer.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        discount,
    }
}

fn sample_orders() -> Vec<Order> {
    vec![
        order(1, "alice", &["apple", "pear"], None),
        order(2, "bob", &["plum"], Some(0.1)),
        order(3, "carol", &[], Some(0.25)),
    ]
}

#[test]
fn identical_collections_pass() {
    let expected = sample_orders();
    let actual = sample_orders();
    assert_data_eq!(expected, actual);
}

#[test]
fn shuffled_collections_pass_with_ignore_order() {
    let expected = sample_orders();
    let mut actual = sample_orders();
    actual.reverse();
    assert_data_eq!(expected, actual, Flag::IgnoreOrder);
}

#[test]
#[should_panic(expected = "datadiff: []Order are not equal")]
fn shuffled_collections_fail_without_flags() {
    let expected = sample_orders();
    let mut actual = sample_orders();
    actual.reverse();
    assert_data_eq!(expected, actual);
}

#[test]
#[should_panic(expected = "← extra in actual")]
fn missing_expected_row_is_reported() {
    let expected = sample_orders()[..2].to_vec();
    let actual = sample_orders();
    assert_data_eq!(expected, actual, Flag::IgnoreOrder);
}

#[test]
fn superset_passes_with_both_flags() {
    let expected = sample_orders()[1..].to_vec();
    let mut actual = sample_orders();
    actual.rotate_left(1);
    assert_data_eq!(expected, actual, Flag::IgnoreOrder, Flag::IgnoreLengths);
}

#[test]
fn nested_field_difference_is_pinpointed() {
    let expected = sample_orders();
    let mut actual = sample_orders();
    actual[0].items.push("fig".to_string());

    let err = check(&expected, &actual, &[Flag::IgnoreOrder]).unwrap_err();
    assert!(matches!(err, AssertError::NotEqual { .. }));

    let table = datadiff_core::Table::from_records(&expected).unwrap();
    let other = datadiff_core::Table::from_records(&actual).unwrap();
    let result = datadiff_core::compare(&table, &other, datadiff_core::CompareOptions::default());
    assert_eq!(result.rows[0].status, RowStatus::Mismatch);
    assert_eq!(result.rows[0].mismatch, Some(vec![false, false, true, false]));
}
