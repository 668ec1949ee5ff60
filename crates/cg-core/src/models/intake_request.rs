use crate::{Decode, lenient};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status reported when the backend omits one
pub const DEFAULT_INTAKE_STATUS: &str = "pending";

/// A student's request for a counseling session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeRequest {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub concern: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub urgency: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub preferred_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
}

impl IntakeRequest {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_INTAKE_STATUS)
    }
}

impl Decode for IntakeRequest {
    const NAME: &'static str = "intake request";
    const LIST_KEYS: &'static [&'static str] = &[
        "intake_requests",
        "requests",
        "data",
        "data.intake_requests",
        "items",
        "results",
    ];
    const ITEM_KEYS: &'static [&'static str] = &["intake_request", "request", "data"];
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] = &[
        ("concern", "reason"),
        ("description", "details"),
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIntakeRequest {
    pub concern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<NaiveDate>,
}
