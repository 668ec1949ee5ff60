use crate::lookup_path;

use serde_json::Value;

/// Substrings that mark an account as staff rather than a student
pub const STAFF_ROLE_MARKERS: &[&str] = &["admin", "counselor", "dean", "registrar", "program_chair"];

/// Substrings that mark a faculty account allowed to file referrals
const REFERRAL_ROLE_MARKERS: &[&str] = &["referral", "dean", "registrar", "program_chair", "faculty"];

/// Trimmed, lower-cased form used for every role comparison
pub fn normalize_role(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_staff_role(raw: &str) -> bool {
    let role = normalize_role(raw);
    STAFF_ROLE_MARKERS.iter().any(|marker| role.contains(marker))
}

/// Dashboard family a role belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Counselor,
    Admin,
    ReferralUser,
    Unknown,
}

impl Role {
    /// Classify a free-form role string. Admin wins over counselor, which
    /// wins over the referral family, so `"admin_counselor"` is an admin.
    pub fn classify(raw: &str) -> Self {
        let role = normalize_role(raw);
        if role.is_empty() {
            Role::Unknown
        } else if role.contains("admin") {
            Role::Admin
        } else if role.contains("counselor") {
            Role::Counselor
        } else if REFERRAL_ROLE_MARKERS.iter().any(|marker| role.contains(marker)) {
            Role::ReferralUser
        } else if role.contains("student") {
            Role::Student
        } else {
            Role::Unknown
        }
    }

    /// Landing path for the role's dashboard
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Counselor => "/counselor",
            Role::Admin => "/admin",
            Role::ReferralUser => "/referral-user",
            Role::Unknown => "/login",
        }
    }

    /// Backend path prefix for role-scoped resources (`/student/messages`)
    pub fn api_prefix(&self) -> Option<&'static str> {
        match self {
            Role::Student => Some("student"),
            Role::Counselor => Some("counselor"),
            Role::Admin => Some("admin"),
            Role::ReferralUser => Some("referral-user"),
            Role::Unknown => None,
        }
    }
}

/// Role names carried by a user or roles payload.
///
/// Looks at a bare array, `roles`, `data.roles`, `user.roles`, then a single
/// `role` / `user.role` string. Entries may be strings or objects with a
/// `name`/`slug`/`role` field. Results are normalized and de-duplicated in
/// first-seen order; an unrecognized payload yields an empty vector.
pub fn extract_roles(payload: &Value) -> Vec<String> {
    let list = match payload {
        Value::Array(items) => Some(items),
        _ => ["roles", "data.roles", "user.roles"]
            .iter()
            .find_map(|key| lookup_path(payload, key).and_then(Value::as_array)),
    };

    let raw: Vec<String> = match list {
        Some(items) => items.iter().filter_map(role_name).collect(),
        None => ["role", "user.role", "data.role"]
            .iter()
            .find_map(|key| lookup_path(payload, key).and_then(role_name))
            .into_iter()
            .collect(),
    };

    let mut roles: Vec<String> = Vec::with_capacity(raw.len());
    for role in raw.iter().map(|r| normalize_role(r)) {
        if !role.is_empty() && !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}

fn role_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => ["name", "slug", "role"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str))
            .map(String::from),
        _ => None,
    }
}
