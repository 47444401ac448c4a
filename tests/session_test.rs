//! Session lifecycle over the file store and a real HTTP backend.

mod common;

use std::sync::Arc;

use tempfile::TempDir;

use bookshelf::adapters::{FileKeyValueStore, ReqwestHttpClient};
use bookshelf::models::{LoginCredentials, RegisterCredentials};
use bookshelf::session::{RestoreOutcome, SessionStore, TOKEN_KEY, USER_KEY};
use bookshelf::startup::{build_services, StartupConfig};
use bookshelf::traits::KeyValueStore;

use common::{FakeBackend, ALICE_JSON, TEST_TOKEN};

fn session_in(dir: &TempDir, base_url: &str) -> (SessionStore, Arc<FileKeyValueStore>) {
    let store = Arc::new(FileKeyValueStore::in_dir(dir.path()));
    let config = StartupConfig::new()
        .with_api_base_url(base_url)
        .with_data_dir(dir.path());
    let (session, _) = build_services(&config, Arc::new(ReqwestHttpClient::new()), store.clone());
    (session, store)
}

fn alice() -> LoginCredentials {
    LoginCredentials {
        username: "alice".to_string(),
        password: "pw".to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_and_survives_restart() {
    let backend = FakeBackend::start().await;
    let dir = TempDir::new().unwrap();

    let (session, store) = session_in(&dir, &backend.uri());
    assert_eq!(session.restore().await, RestoreOutcome::NoSession);

    let user = session.login(alice()).await.unwrap();
    assert_eq!(user.username, "alice");
    assert!(session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some(TEST_TOKEN));

    // A fresh process restores from the same file
    let (restarted, _) = session_in(&dir, &backend.uri());
    assert_eq!(restarted.restore().await, RestoreOutcome::Restored);
    assert_eq!(restarted.user().unwrap().email, "a@x.com");
}

#[tokio::test]
async fn test_wrong_password_stays_signed_out() {
    let backend = FakeBackend::start().await;
    let dir = TempDir::new().unwrap();
    let (session, store) = session_in(&dir, &backend.uri());
    session.restore().await;

    let err = session
        .login(LoginCredentials {
            username: "alice".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid username or password.");
    assert!(!session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_register_signs_in() {
    let backend = FakeBackend::start().await;
    let dir = TempDir::new().unwrap();
    let (session, store) = session_in(&dir, &backend.uri());
    session.restore().await;

    session
        .register(RegisterCredentials {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert!(store.get(USER_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn test_corrupt_user_clears_both_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::in_dir(dir.path());
    store.set(TOKEN_KEY, TEST_TOKEN).await.unwrap();
    store.set(USER_KEY, "{not json").await.unwrap();

    let (session, store) = session_in(&dir, "http://127.0.0.1:1");
    assert_eq!(session.restore().await, RestoreOutcome::Corrupt);
    assert!(!session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    assert_eq!(store.get(USER_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_logout_clears_storage() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::in_dir(dir.path());
    store.set(TOKEN_KEY, TEST_TOKEN).await.unwrap();
    store.set(USER_KEY, ALICE_JSON).await.unwrap();

    let (session, store) = session_in(&dir, "http://127.0.0.1:1");
    assert_eq!(session.restore().await, RestoreOutcome::Restored);

    session.logout().await;
    assert!(!session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    assert_eq!(store.get(USER_KEY).await.unwrap(), None);
}
