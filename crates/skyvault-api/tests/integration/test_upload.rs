//! End-to-end tests: use cases wired over the HTTP provider
//!
//! Exercises the upload coordinator's two-phase protocol, the login flow's
//! single follow-up refresh, and the no-token preconditions against a
//! wiremock server, verifying request counts on the wire.

use std::sync::Arc;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use skyvault_api::provider::RemoteVault;
use skyvault_core::domain::{FileName, FileRegistry, PendingUpload, Session, VaultError};
use skyvault_core::ports::{MemorySessionStore, SessionStore};
use skyvault_core::usecases::{AuthFlow, FileOperations, UploadCoordinator, UploadOutcome};

use crate::common;
use crate::common::TEST_TOKEN;

fn name(s: &str) -> FileName {
    FileName::new(s).unwrap()
}

fn authenticated_store() -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    store
        .save(&Session::new(TEST_TOKEN, "alice").unwrap())
        .unwrap();
    store
}

#[tokio::test]
async fn test_duplicate_name_sends_no_upload_request() {
    let (server, client) = common::setup_api().await;
    common::mount_list(&server, &["report.pdf"]).await;

    // The upload endpoint must never be hit
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let provider = Arc::new(RemoteVault::new(client));
    let coordinator = UploadCoordinator::new(provider, authenticated_store());

    let mut registry = FileRegistry::new();
    let pending = PendingUpload::new(name("report.pdf"), b"contents".to_vec());
    let outcome = coordinator
        .upload(pending, &mut registry)
        .await
        .expect("coordinator failed");

    assert!(matches!(outcome, UploadOutcome::DuplicateName { .. }));
    assert!(!coordinator.is_busy());
}

#[tokio::test]
async fn test_fresh_name_uploads_once_and_refreshes() {
    let (server, client) = common::setup_api().await;

    // Duplicate-check listing plus the post-upload refresh listing
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(common::bearer_auth())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "files": ["report.pdf"] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(common::bearer_auth())
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "File 'new.pdf' uploaded successfully!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = Arc::new(RemoteVault::new(client));
    let coordinator = UploadCoordinator::new(provider, authenticated_store());

    let mut registry = FileRegistry::new();
    let pending = PendingUpload::new(name("new.pdf"), b"%PDF-1.4".to_vec());
    let outcome = coordinator
        .upload(pending, &mut registry)
        .await
        .expect("coordinator failed");

    match outcome {
        UploadOutcome::Uploaded {
            message,
            refresh_error,
        } => {
            assert_eq!(message, "File 'new.pdf' uploaded successfully!");
            assert!(refresh_error.is_none());
        }
        other => panic!("expected uploaded outcome, got {:?}", other),
    }
    assert!(!coordinator.is_busy());
    assert!(registry.contains(&name("report.pdf")));
}

#[tokio::test]
async fn test_download_without_token_issues_no_requests() {
    let (server, client) = common::setup_api().await;

    let provider = Arc::new(RemoteVault::new(client));
    let ops = FileOperations::new(provider, Arc::new(MemorySessionStore::new()));

    let result = ops.download(&name("doc.txt")).await;

    assert_eq!(result.unwrap_err(), VaultError::AuthRequired);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_without_token_issues_no_requests() {
    let (server, client) = common::setup_api().await;

    let provider = Arc::new(RemoteVault::new(client));
    let ops = FileOperations::new(provider, Arc::new(MemorySessionStore::new()));

    let mut registry = FileRegistry::new();
    let result = ops.delete(&name("doc.txt"), &mut registry).await;

    assert_eq!(result.unwrap_err(), VaultError::AuthRequired);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_stores_token_and_refreshes_once() {
    let (server, client) = common::setup_api().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-live"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The refresh must carry the freshly issued token
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(header("authorization", "Bearer tok-live"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "files": ["a.txt", "b.txt"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = Arc::new(RemoteVault::new(client));
    let sessions = Arc::new(MemorySessionStore::new());
    let mut flow = AuthFlow::new(provider, sessions.clone());

    let mut registry = FileRegistry::new();
    let outcome = flow
        .login("alice", "secret", &mut registry)
        .await
        .expect("login failed");

    assert_eq!(outcome.session.token(), "tok-live");
    assert!(outcome.refresh_error.is_none());
    assert_eq!(sessions.token().as_deref(), Some("tok-live"));
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn test_signup_validation_failure_issues_no_requests() {
    let (server, client) = common::setup_api().await;

    let provider = Arc::new(RemoteVault::new(client));
    let sessions = Arc::new(MemorySessionStore::new());
    let mut flow = AuthFlow::new(provider, sessions);

    let result = flow.signup("alice", "pw1", "pw2").await;

    assert!(matches!(result, Err(VaultError::Validation(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}
