use crate::{Decode, User, lenient, normalize_token};

use serde::{Deserialize, Serialize};

/// The client's cached authentication state, persisted as `{ user, token }`.
///
/// `token` never carries a `Bearer ` prefix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub token: Option<String>,
}

impl Session {
    pub fn new(user: Option<User>, token: Option<&str>) -> Self {
        Self {
            user,
            token: token.and_then(normalize_token),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.token.is_none()
    }

    /// Copy with the token re-normalized, for sessions read from storage
    pub fn normalized(self) -> Self {
        let token = self.token.as_deref().and_then(normalize_token);
        Self {
            user: self.user,
            token,
        }
    }
}

/// Body returned by login and register
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub access_token: Option<String>,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        let token = self.token.or(self.access_token);
        Session::new(self.user, token.as_deref())
    }
}

impl Decode for AuthResponse {
    const NAME: &'static str = "auth response";
    const ITEM_KEYS: &'static [&'static str] = &["data"];
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
