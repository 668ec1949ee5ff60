use crate::{Decode, lenient};

use serde::{Deserialize, Serialize};

/// A faculty referral of a student to the guidance office
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub student_name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub referred_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub counselor_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
}

impl Decode for Referral {
    const NAME: &'static str = "referral";
    const LIST_KEYS: &'static [&'static str] =
        &["referrals", "data", "data.referrals", "items", "results"];
    const ITEM_KEYS: &'static [&'static str] = &["referral", "data"];
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] =
        &[("referred_by", "referrer_name")];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReferral {
    pub student_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
