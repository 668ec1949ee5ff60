use crate::{AnalyticsSummary, Decode};

use googletest::assert_that;
use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_string_counts_when_decode_then_coerced_to_numbers() {
    // Given
    let payload = json!({
        "this_month_count": "12",
        "monthly_counts": [{"year": 2024, "month": 1, "count": "5"}]
    });

    // When
    let summary = AnalyticsSummary::decode(&payload).unwrap();

    // Then
    assert_that!(summary.this_month_count, eq(12));
    assert_that!(summary.monthly_counts, len(eq(1)));
    assert_that!(summary.monthly_counts[0].count, eq(5));
    assert_that!(summary.monthly_counts[0].year, eq(2024));
    assert_that!(summary.monthly_counts[0].month, eq(1));
}

#[test]
fn given_data_envelope_and_nulls_when_decode_then_defaults() {
    // Given
    let payload = json!({
        "data": {
            "total": "40",
            "last_month_count": null,
            "monthly_counts": null,
            "status_counts": {"pending": "3", "closed": 4, "bogus": "x"}
        }
    });

    // When
    let summary = AnalyticsSummary::decode(&payload).unwrap();

    // Then
    assert_that!(summary.total_count, eq(40));
    assert_that!(summary.last_month_count, eq(0));
    assert_that!(summary.monthly_counts, is_empty());
    assert_eq!(summary.status_counts.get("pending"), Some(&3));
    assert_eq!(summary.status_counts.get("closed"), Some(&4));
    assert_eq!(summary.status_counts.get("bogus"), Some(&0));
}

#[test]
fn given_empty_object_when_decode_then_all_zero() {
    let summary = AnalyticsSummary::decode(&json!({})).unwrap();
    assert_eq!(summary, AnalyticsSummary::default());
}
