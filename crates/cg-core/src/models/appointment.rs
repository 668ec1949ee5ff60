use crate::{Decode, lenient};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub counselor_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub counselor_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub scheduled_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub notes: Option<String>,
}

impl Decode for Appointment {
    const NAME: &'static str = "appointment";
    const LIST_KEYS: &'static [&'static str] =
        &["appointments", "data", "data.appointments", "items", "results"];
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] =
        &[("scheduled_at", "scheduled_date")];
}
