use crate::{
    SESSION_STORAGE_KEY,
    storage::{BrowserStorage, KeyValueStore, MemoryStore},
};

use cg_core::Session;

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

#[test]
fn given_no_token_anywhere_when_headers_built_then_no_authorization() {
    let (client, _) = super::client_with(BrowserStorage::in_memory());

    let headers = client.build_auth_headers(HeaderMap::new()).unwrap();

    assert_eq!(authorization(&headers), None);
    assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn given_session_token_when_headers_built_then_bearer_added() {
    let (client, session) = super::client_with(BrowserStorage::in_memory());
    session.set(Session::new(None, Some("abc"))).unwrap();

    let headers = client.build_auth_headers(HeaderMap::new()).unwrap();

    assert_eq!(authorization(&headers), Some("Bearer abc"));
}

#[test]
fn given_caller_authorization_with_bearer_when_headers_built_then_not_doubled() {
    let (client, session) = super::client_with(BrowserStorage::in_memory());
    session.set(Session::new(None, Some("stored"))).unwrap();
    let mut extra = HeaderMap::new();
    extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));

    let headers = client.build_auth_headers(extra).unwrap();

    assert_eq!(authorization(&headers), Some("Bearer xyz"));
}

#[test]
fn given_caller_authorization_without_prefix_when_headers_built_then_prefixed() {
    let (client, _) = super::client_with(BrowserStorage::in_memory());
    let mut extra = HeaderMap::new();
    extra.insert(AUTHORIZATION, HeaderValue::from_static("bearer   xyz"));

    let headers = client.build_auth_headers(extra).unwrap();

    assert_eq!(authorization(&headers), Some("Bearer xyz"));
}

#[test]
fn given_caller_authorization_null_when_headers_built_then_stored_token_used() {
    let (client, session) = super::client_with(BrowserStorage::in_memory());
    session.set(Session::new(None, Some("stored"))).unwrap();
    let mut extra = HeaderMap::new();
    extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer null"));

    let headers = client.build_auth_headers(extra).unwrap();

    assert_eq!(authorization(&headers), Some("Bearer stored"));
}

#[test]
fn given_caller_content_type_when_headers_built_then_preserved() {
    let (client, _) = super::client_with(BrowserStorage::in_memory());
    let mut extra = HeaderMap::new();
    extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    let headers = client.build_auth_headers(extra).unwrap();

    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
}

#[test]
fn given_legacy_token_key_when_headers_built_then_used() {
    let persistent = Arc::new(MemoryStore::with_entries([("access_token", "Bearer legacy")]));
    let storage = BrowserStorage::new(Arc::new(MemoryStore::new()), persistent);
    let (client, _) = super::client_with(storage);

    let headers = client.build_auth_headers(HeaderMap::new()).unwrap();

    assert_eq!(authorization(&headers), Some("Bearer legacy"));
}

#[test]
fn given_stored_session_when_client_created_then_token_restored() {
    let persistent = Arc::new(MemoryStore::new());
    persistent
        .set(SESSION_STORAGE_KEY, r#"{"user":null,"token":"Bearer restored"}"#)
        .unwrap();
    let storage = BrowserStorage::new(Arc::new(MemoryStore::new()), persistent);
    let (client, session) = super::client_with(storage);

    let headers = client.build_auth_headers(HeaderMap::new()).unwrap();

    assert_eq!(session.token().as_deref(), Some("restored"));
    assert_eq!(authorization(&headers), Some("Bearer restored"));
}
