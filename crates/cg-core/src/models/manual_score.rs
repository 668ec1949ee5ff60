use crate::{Decode, lenient};

use serde::{Deserialize, Serialize};

/// A counselor-entered assessment score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualScore {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub recorded_at: Option<String>,
}

impl Decode for ManualScore {
    const NAME: &'static str = "manual score";
    const LIST_KEYS: &'static [&'static str] = &[
        "scores",
        "manual_scores",
        "data",
        "data.scores",
        "items",
        "results",
    ];
    const ITEM_KEYS: &'static [&'static str] = &["score", "manual_score", "data"];
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] = &[("category", "assessment")];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewManualScore {
    pub student_id: String,
    pub category: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
