#![allow(dead_code)]

use cg_client::{BrowserStorage, GuidanceClient, MemoryStore};
use cg_core::{Session, User};

use std::sync::Arc;

use wiremock::MockServer;

/// Client against the mock server with fresh in-memory storage
pub fn client_for(server: &MockServer) -> GuidanceClient {
    GuidanceClient::new(&server.uri()).expect("mock server URI is a valid base URL")
}

/// Client whose persistent storage starts with `entries`
pub fn client_with_persisted(server: &MockServer, entries: &[(&str, &str)]) -> GuidanceClient {
    let persistent = MemoryStore::with_entries(entries.iter().copied());
    let storage = BrowserStorage::new(Arc::new(MemoryStore::new()), Arc::new(persistent));
    GuidanceClient::with_storage(&server.uri(), storage).expect("valid base URL")
}

/// Client already holding a session token
pub fn logged_in_client(server: &MockServer, token: &str) -> GuidanceClient {
    let client = client_for(server);
    let user = User {
        id: "1".to_string(),
        email: "staff@example.edu".to_string(),
        role: Some("counselor".to_string()),
        ..User::default()
    };
    client
        .session()
        .set(Session::new(Some(user), Some(token)))
        .expect("in-memory session write");
    client
}
