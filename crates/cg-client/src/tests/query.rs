use crate::ListQuery;

use chrono::NaiveDate;
use googletest::assert_that;
use googletest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_empty_query_when_paired_then_nothing_sent() {
    assert_that!(ListQuery::new().is_empty(), eq(true));
}

#[test]
fn given_all_fields_when_paired_then_fixed_order_and_iso_dates() {
    let query = ListQuery::new()
        .page(2)
        .per_page(25)
        .status("pending")
        .search("dela cruz")
        .date_range(Some(date(2024, 1, 5)), Some(date(2024, 2, 1)));

    let pairs: Vec<(&str, String)> = query.pairs();

    assert_eq!(
        pairs,
        vec![
            ("page", "2".to_string()),
            ("per_page", "25".to_string()),
            ("status", "pending".to_string()),
            ("search", "dela cruz".to_string()),
            ("start_date", "2024-01-05".to_string()),
            ("end_date", "2024-02-01".to_string()),
        ]
    );
}

#[test]
fn given_blank_text_filters_when_paired_then_omitted() {
    let query = ListQuery::new().status("  ").search("");
    assert_that!(query.is_empty(), eq(true));
}

#[test]
fn given_inverted_range_when_validated_then_error() {
    let query = ListQuery::new().date_range(Some(date(2024, 3, 1)), Some(date(2024, 1, 1)));
    assert_that!(query.validate(), err(anything()));
}

#[test]
fn given_open_ended_range_when_validated_then_ok() {
    let query = ListQuery::new().date_range(Some(date(2024, 3, 1)), None);
    assert_that!(query.validate(), ok(anything()));
}
