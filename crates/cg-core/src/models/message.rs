use crate::{Decode, lenient, lookup_path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub sender_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub sender_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub recipient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_read: bool,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
}

impl Decode for Message {
    const NAME: &'static str = "message";
    const LIST_KEYS: &'static [&'static str] =
        &["messages", "data", "data.messages", "items", "results"];
    const ITEM_KEYS: &'static [&'static str] = &["data", "message"];
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] = &[
        ("body", "content"),
        ("is_read", "read"),
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub recipient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

/// Unread badge count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnreadCount {
    pub count: u64,
}

impl UnreadCount {
    const KEYS: &'static [&'static str] = &[
        "count",
        "unread",
        "unread_count",
        "data.count",
        "data.unread",
        "data.unread_count",
    ];

    /// Accepts a bare number or any of the keyed shapes; defaults to zero
    pub fn from_payload(payload: &Value) -> Self {
        let count = if payload.is_number() || payload.is_string() {
            lenient::coerce_u64(payload)
        } else {
            Self::KEYS
                .iter()
                .find_map(|key| lookup_path(payload, key))
                .map(lenient::coerce_u64)
                .unwrap_or(0)
        };
        Self { count }
    }
}
