use crate::{Role, extract_roles, is_staff_role, normalize_role};

use googletest::assert_that;
use googletest::prelude::*;
use serde_json::json;

// =========================================================================
// Normalization / classification
// =========================================================================

#[test]
fn given_padded_mixed_case_role_when_normalized_then_trimmed_lowercase() {
    assert_that!(normalize_role("  Guidance_Counselor ").as_str(), eq("guidance_counselor"));
}

#[test]
fn given_staff_markers_when_is_staff_then_true() {
    for role in ["Admin", "counselor", "DEAN", "registrar", " program_chair "] {
        assert!(is_staff_role(role), "{role} should be staff");
    }
    assert!(!is_staff_role("student"));
    assert!(!is_staff_role(""));
}

#[test]
fn given_roles_when_classified_then_home_path_matches_dashboard() {
    assert_eq!(Role::classify("Student").home_path(), "/student");
    assert_eq!(Role::classify("guidance_counselor").home_path(), "/counselor");
    assert_eq!(Role::classify("super_admin").home_path(), "/admin");
    assert_eq!(Role::classify("Dean").home_path(), "/referral-user");
    assert_eq!(Role::classify("referral_user").home_path(), "/referral-user");
    assert_eq!(Role::classify("visitor").home_path(), "/login");
    assert_eq!(Role::classify("   ").home_path(), "/login");
}

#[test]
fn given_admin_and_counselor_when_classified_then_admin_wins() {
    assert_eq!(Role::classify("admin_counselor"), Role::Admin);
}

// =========================================================================
// extract_roles
// =========================================================================

#[test]
fn given_roles_array_of_strings_and_objects_when_extract_then_normalized() {
    // Given
    let payload = json!({"roles": ["Admin ", {"name": "Counselor"}, {"slug": "admin"}, 3]});

    // When
    let roles = extract_roles(&payload);

    // Then
    assert_eq!(roles, vec!["admin".to_string(), "counselor".to_string()]);
}

#[test]
fn given_single_role_string_when_extract_then_one_role() {
    let roles = extract_roles(&json!({"user": {"role": "Student"}}));
    assert_eq!(roles, vec!["student".to_string()]);
}

#[test]
fn given_nested_data_roles_when_extract_then_found() {
    let roles = extract_roles(&json!({"data": {"roles": ["dean"]}}));
    assert_eq!(roles, vec!["dean".to_string()]);
}

#[test]
fn given_unrecognized_payload_when_extract_then_empty() {
    assert_that!(extract_roles(&json!({"permissions": ["x"]})), is_empty());
    assert_that!(extract_roles(&json!(null)), is_empty());
}

#[test]
fn given_payload_when_extract_twice_then_identical() {
    let payload = json!(["Admin", "admin", "Counselor"]);
    assert_eq!(extract_roles(&payload), extract_roles(&payload));
    assert_that!(extract_roles(&payload), len(eq(2)));
}
