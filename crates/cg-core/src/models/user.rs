use crate::{Decode, Role, lenient, normalize_role};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An authenticated account as the backend describes it.
///
/// Fields the client does not model are kept in `extra` so the persisted
/// session round-trips without losing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Trimmed, lower-cased role (empty when the backend sent none)
    pub fn normalized_role(&self) -> String {
        self.role.as_deref().map(normalize_role).unwrap_or_default()
    }

    pub fn role_kind(&self) -> Role {
        Role::classify(self.role.as_deref().unwrap_or_default())
    }

    /// Name for display, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl Decode for User {
    const NAME: &'static str = "user";
    const LIST_KEYS: &'static [&'static str] = &["users", "data", "data.users", "items", "results"];
    const ITEM_KEYS: &'static [&'static str] = &["user", "data.user", "data"];
}
