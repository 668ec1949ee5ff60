use crate::{
    SessionStore, TokenResolver,
    storage::{BrowserStorage, MemoryStore},
};

use cg_core::Session;

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::*;

fn resolver(volatile: MemoryStore, persistent: MemoryStore) -> TokenResolver {
    let storage = BrowserStorage::new(Arc::new(volatile), Arc::new(persistent));
    let session = SessionStore::new(storage.persistent.clone());
    TokenResolver::new(session, storage)
}

#[test]
fn given_empty_storage_when_resolved_then_none() {
    let resolver = resolver(MemoryStore::new(), MemoryStore::new());
    assert_that!(resolver.resolve(), none());
}

#[test]
fn given_session_token_when_resolved_then_session_wins_over_storage() {
    let resolver = resolver(
        MemoryStore::with_entries([("token", "volatile")]),
        MemoryStore::new(),
    );
    resolver
        .session()
        .set(Session::new(None, Some("from-session")))
        .unwrap();

    assert_eq!(resolver.resolve().as_deref(), Some("from-session"));
}

#[test]
fn given_direct_keys_in_both_tiers_when_resolved_then_volatile_first() {
    let resolver = resolver(
        MemoryStore::with_entries([("jwt", "volatile")]),
        MemoryStore::with_entries([("token", "persistent")]),
    );

    assert_eq!(resolver.resolve().as_deref(), Some("volatile"));
}

#[test]
fn given_direct_key_order_when_resolved_then_token_before_jwt() {
    let resolver = resolver(
        MemoryStore::with_entries([("jwt", "second"), ("token", "first")]),
        MemoryStore::new(),
    );

    assert_eq!(resolver.resolve().as_deref(), Some("first"));
}

#[test]
fn given_sentinel_direct_value_when_resolved_then_next_source_used() {
    let resolver = resolver(
        MemoryStore::with_entries([("token", "undefined")]),
        MemoryStore::with_entries([("authToken", "real")]),
    );

    assert_eq!(resolver.resolve().as_deref(), Some("real"));
}

#[test]
fn given_nested_envelope_when_resolved_then_token_found() {
    let resolver = resolver(
        MemoryStore::new(),
        MemoryStore::with_entries([(
            "auth",
            r#"{"state":{"session":{"accessToken":"Bearer nested"}}}"#,
        )]),
    );

    assert_eq!(resolver.resolve().as_deref(), Some("nested"));
}

#[test]
fn given_current_user_envelope_when_resolved_then_access_token_used() {
    let resolver = resolver(
        MemoryStore::with_entries([(
            "currentUser",
            r#"{"id":3,"email":"s@example.edu","access_token":"cu-token"}"#,
        )]),
        MemoryStore::new(),
    );

    assert_eq!(resolver.resolve().as_deref(), Some("cu-token"));
}

#[test]
fn given_unparseable_envelope_when_resolved_then_skipped() {
    let resolver = resolver(
        MemoryStore::with_entries([("session", "not json")]),
        MemoryStore::new(),
    );

    assert_that!(resolver.resolve(), none());
}

#[test]
fn given_only_unusual_token_key_when_resolved_then_found_by_name() {
    let resolver = resolver(
        MemoryStore::new(),
        MemoryStore::with_entries([("guidance_refresh_TOKEN_v2", "\"scanned\"")]),
    );

    assert_eq!(resolver.resolve().as_deref(), Some("scanned"));
}
