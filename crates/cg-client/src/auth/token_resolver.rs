//! Bearer token discovery.
//!
//! Earlier builds of the web client stored the token under a handful of
//! different keys. The resolver reads all of them, newest convention first,
//! and never writes any of them back.

use crate::{session::SessionStore, storage::BrowserStorage};

use cg_core::normalize_token;

use serde_json::Value;

/// Keys whose value is the token itself
pub const DIRECT_TOKEN_KEYS: &[&str] = &[
    "token",
    "access_token",
    "accessToken",
    "auth_token",
    "authToken",
    "jwt",
];

/// Keys whose value is a JSON object that may carry a token
pub const SESSION_ENVELOPE_KEYS: &[&str] = &[
    "cg.session",
    "session",
    "auth",
    "user",
    "currentUser",
    "auth_session",
];

/// Token-bearing fields inside an envelope
pub const ENVELOPE_TOKEN_FIELDS: &[&str] = &["token", "access_token", "accessToken"];

const MAX_ENVELOPE_DEPTH: usize = 4;

#[derive(Debug, Clone)]
pub struct TokenResolver {
    session: SessionStore,
    storage: BrowserStorage,
}

impl TokenResolver {
    pub fn new(session: SessionStore, storage: BrowserStorage) -> Self {
        Self { session, storage }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn storage(&self) -> &BrowserStorage {
        &self.storage
    }

    /// Normalized token, or `None` when nothing usable is stored anywhere
    pub fn resolve(&self) -> Option<String> {
        self.session
            .token()
            .and_then(|t| normalize_token(&t))
            .or_else(|| self.from_direct_keys())
            .or_else(|| self.from_envelopes())
            .or_else(|| self.from_any_token_key())
    }

    fn from_direct_keys(&self) -> Option<String> {
        self.storage.tiers().into_iter().find_map(|tier| {
            DIRECT_TOKEN_KEYS
                .iter()
                .find_map(|key| tier.get(key).and_then(|raw| token_from_raw(&raw)))
        })
    }

    fn from_envelopes(&self) -> Option<String> {
        self.storage.tiers().into_iter().find_map(|tier| {
            SESSION_ENVELOPE_KEYS.iter().find_map(|key| {
                let raw = tier.get(key)?;
                let parsed: Value = serde_json::from_str(&raw).ok()?;
                token_in_envelope(&parsed, 0)
            })
        })
    }

    fn from_any_token_key(&self) -> Option<String> {
        self.storage.tiers().into_iter().find_map(|tier| {
            tier.keys()
                .iter()
                .filter(|key| key.to_ascii_lowercase().contains("token"))
                .find_map(|key| tier.get(key).and_then(|raw| token_from_raw(&raw)))
        })
    }
}

/// A stored value is either the bare token or a JSON envelope around one
fn token_from_raw(raw: &str) -> Option<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => token_in_envelope(&value, 0),
        Ok(Value::String(inner)) => normalize_token(&inner),
        _ => normalize_token(raw),
    }
}

fn token_in_envelope(value: &Value, depth: usize) -> Option<String> {
    if depth > MAX_ENVELOPE_DEPTH {
        return None;
    }

    let Value::Object(map) = value else {
        return None;
    };

    ENVELOPE_TOKEN_FIELDS
        .iter()
        .find_map(|field| map.get(*field).and_then(Value::as_str).and_then(normalize_token))
        .or_else(|| {
            map.values()
                .filter(|nested| nested.is_object())
                .find_map(|nested| token_in_envelope(nested, depth + 1))
        })
}
