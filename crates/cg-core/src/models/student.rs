use crate::{Decode, lenient};

use serde::{Deserialize, Serialize};

/// Envelope keys the student directory has used across backend versions
pub const STUDENT_LIST_KEYS: &[&str] = &["students", "users", "data", "data.students", "results", "items"];

/// One row of the counselor's student directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub student_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub program: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub year_level: Option<String>,
}

impl Decode for StudentSummary {
    const NAME: &'static str = "student";
    const LIST_KEYS: &'static [&'static str] = STUDENT_LIST_KEYS;
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] = &[
        ("name", "full_name"),
        ("student_number", "student_id_number"),
        ("program", "course"),
    ];
}
