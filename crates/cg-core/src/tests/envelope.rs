use crate::models::student::STUDENT_LIST_KEYS;
use crate::{Decode, ListShape, StudentSummary, classify_list, extract_array, extract_object};

use googletest::assert_that;
use googletest::prelude::*;
use serde_json::{Value, json};

// =========================================================================
// extract_array
// =========================================================================

#[test]
fn given_bare_array_when_extract_then_returned_as_is() {
    // Given
    let payload = json!([{"id": 1}, {"id": 2}]);

    // When
    let items = extract_array(&payload, STUDENT_LIST_KEYS);

    // Then
    assert_that!(items, len(eq(2)));
}

#[test]
fn given_keys_in_priority_order_when_extract_then_first_array_wins() {
    // Given
    let payload = json!({
        "users": [{"id": "u1"}],
        "students": [{"id": "s1"}, {"id": "s2"}]
    });

    // When
    let items = extract_array(&payload, STUDENT_LIST_KEYS);

    // Then
    assert_that!(items, len(eq(2)));
    assert_eq!(items[0]["id"], "s1");
}

#[test]
fn given_nested_data_students_when_extract_then_found() {
    // Given
    let payload = json!({"data": {"students": [{"id": 7}], "total": 1}});

    // When
    let shape = classify_list(&payload, STUDENT_LIST_KEYS);

    // Then
    assert!(matches!(shape, ListShape::Keyed { key: "data.students", .. }));
    assert_eq!(shape.items().len(), 1);
}

#[test]
fn given_non_array_under_key_when_extract_then_skipped() {
    // Given
    let payload = json!({"students": "none", "items": [{"id": 1}]});

    // When
    let shape = classify_list(&payload, STUDENT_LIST_KEYS);

    // Then
    assert!(matches!(shape, ListShape::Keyed { key: "items", .. }));
}

#[test]
fn given_no_recognized_key_when_extract_then_empty_not_error() {
    // Given
    let payload = json!({"unexpected": [{"id": 1}]});

    // When
    let shape = classify_list(&payload, STUDENT_LIST_KEYS);
    let items = extract_array(&payload, STUDENT_LIST_KEYS);

    // Then
    assert_eq!(shape, ListShape::Missing);
    assert_that!(items, is_empty());
}

#[test]
fn given_null_payload_when_extract_then_empty() {
    let items = extract_array(&Value::Null, STUDENT_LIST_KEYS);
    assert_that!(items, is_empty());
}

#[test]
fn given_same_payload_when_extract_twice_then_same_result() {
    // Given
    let payload = json!({"results": [{"id": 1}, {"id": 2}, {"id": 3}]});

    // When
    let first = extract_array(&payload, STUDENT_LIST_KEYS);
    let second = extract_array(&payload, STUDENT_LIST_KEYS);

    // Then
    assert_eq!(first, second);
}

// =========================================================================
// extract_object / Decode
// =========================================================================

#[test]
fn given_data_wrapper_when_extract_object_then_unwrapped() {
    let payload = json!({"data": {"id": 3}});
    assert_eq!(extract_object(&payload, &["data"]), &json!({"id": 3}));
}

#[test]
fn given_string_under_key_when_extract_object_then_payload_returned() {
    let payload = json!({"message": "Saved", "id": 9});
    assert_eq!(extract_object(&payload, &["message"]), &payload);
}

#[test]
fn given_student_list_with_mixed_shapes_when_decode_list_then_canonical() {
    // Given
    let payload = json!({
        "data": {
            "students": [
                {"id": 12, "full_name": "Ana Cruz", "course": "BSCS"},
                {"id": "13", "name": "Ben Uy", "email": null}
            ]
        }
    });

    // When
    let students = StudentSummary::decode_list(&payload).unwrap();

    // Then
    assert_that!(students, len(eq(2)));
    assert_that!(students[0].id.as_str(), eq("12"));
    assert_that!(students[0].name.as_str(), eq("Ana Cruz"));
    assert_that!(students[0].program, some(eq("BSCS")));
    assert_that!(students[1].email, none());
}

#[test]
fn given_list_with_non_object_item_when_decode_list_then_error() {
    let payload = json!({"students": [{"id": 1}, "oops"]});
    let result = StudentSummary::decode_list(&payload);
    assert_that!(result, err(anything()));
}

#[test]
fn given_scalar_when_decode_then_error() {
    let result = StudentSummary::decode(&json!("nope"));
    assert_that!(result, err(anything()));
}
