//! Login, session persistence and logout against a wiremock server

mod common;

use cg_client::{
    ApiRequest, BrowserStorage, FileStore, GuidanceClient, MemoryStore, SESSION_STORAGE_KEY,
};
use cg_core::{Credentials, Session};

use std::sync::Arc;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn credentials() -> Credentials {
    Credentials {
        email: "ana@example.edu".to_string(),
        password: "secret".to_string(),
    }
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "ana@example.edu", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": 5, "name": "Ana", "email": "ana@example.edu", "role": "student" },
            "token": token
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_stores_session_and_round_trips_storage() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "abc").await;

    let client = common::client_for(&mock_server);
    let session = client.auth().login(&credentials()).await.unwrap();

    assert_eq!(client.session().get().token.as_deref(), Some("abc"));
    assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some("5"));

    let raw = client
        .storage()
        .persistent
        .get(SESSION_STORAGE_KEY)
        .expect("session persisted");
    let stored: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, session);
}

#[tokio::test]
async fn test_requests_after_login_carry_bearer_token() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "Bearer abc").await;

    Mock::given(method("GET"))
        .and(path("/student/messages/unread-count"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unread_count": "3" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    client.auth().login(&credentials()).await.unwrap();
    let unread = client
        .messages()
        .unread_count(cg_core::Role::Student)
        .await
        .unwrap();

    assert_eq!(unread.count, 3);
}

#[tokio::test]
async fn test_raw_caller_authorization_normalized_to_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let request = ApiRequest::get("/auth/me").header("Authorization", "xyz").unwrap();
    client.api().send_value(request).await.unwrap();
}

#[tokio::test]
async fn test_failed_login_leaves_session_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid credentials"
        })))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let err = client.auth().login(&credentials()).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.display_message(), "Invalid credentials");
    assert!(client.session().get().is_empty());
}

#[tokio::test]
async fn test_logout_clears_local_session_even_when_server_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::logged_in_client(&mock_server, "abc");
    client.auth().logout().await.unwrap();

    assert!(client.session().get().is_empty());
    assert!(client.storage().persistent.get(SESSION_STORAGE_KEY).is_none());
}

#[tokio::test]
async fn test_refresh_session_replaces_user_and_keeps_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "user": { "id": 1, "email": "staff@example.edu", "role": "Admin" } }
        })))
        .mount(&mock_server)
        .await;

    let client = common::logged_in_client(&mock_server, "abc");
    let session = client.auth().refresh_session().await.unwrap();

    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(
        session.user.map(|u| u.role_kind().home_path()),
        Some("/admin")
    );
}

#[tokio::test]
async fn test_register_without_token_does_not_store_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Registered, please verify your email"
        })))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let registration = cg_core::Registration {
        name: "Ana".to_string(),
        email: "ana@example.edu".to_string(),
        password: "secret".to_string(),
        password_confirmation: "secret".to_string(),
        role: None,
    };
    let session = client.auth().register(&registration).await.unwrap();

    assert!(session.is_empty());
    assert!(client.storage().persistent.get(SESSION_STORAGE_KEY).is_none());
}

#[tokio::test]
async fn test_session_survives_restart_with_file_storage() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "persisted").await;
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let storage = BrowserStorage::with_file(&path).unwrap();
    let first = GuidanceClient::with_storage(&mock_server.uri(), storage).unwrap();
    first.auth().login(&credentials()).await.unwrap();

    let restarted = BrowserStorage::new(
        Arc::new(MemoryStore::new()),
        Arc::new(FileStore::open(&path).unwrap()),
    );
    let second = GuidanceClient::with_storage(&mock_server.uri(), restarted).unwrap();

    assert_eq!(second.session().token().as_deref(), Some("persisted"));
    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(on_disk.get(SESSION_STORAGE_KEY).is_some());
}
