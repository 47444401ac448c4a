//! Main preflight orchestration module.
//!
//! Builds the production adapters from a [`StartupConfig`] and restores the
//! stored session, so the TUI starts on the right screen.

use std::fs;
use std::sync::Arc;

use tracing::{info, warn};

use super::config::{StartupConfig, StartupResult};
use crate::adapters::{FileKeyValueStore, ReqwestHttpClient};
use crate::api::{ApiClient, AuthApi, BooksApi};
use crate::session::{RestoreOutcome, SessionStore};
use crate::traits::{HttpClient, KeyValueStore};

/// Error type for preflight checks.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    /// The data directory could not be created
    #[error("Failed to create data directory {path}: {source}")]
    DataDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Create the data directory if it is missing.
pub fn ensure_data_dir(config: &StartupConfig) -> Result<(), PreflightError> {
    fs::create_dir_all(config.data_dir()).map_err(|source| PreflightError::DataDir {
        path: config.data_dir().display().to_string(),
        source,
    })
}

/// Wire the session store and book client over the given adapters.
pub fn build_services(
    config: &StartupConfig,
    http: Arc<dyn HttpClient>,
    storage: Arc<dyn KeyValueStore>,
) -> (SessionStore, BooksApi) {
    let client = ApiClient::new(&config.api_base_url, http, storage.clone());
    let session = SessionStore::new(storage, AuthApi::new(client.clone()));
    (session, BooksApi::new(client))
}

/// Run all preflight checks before starting the TUI.
///
/// 1. Ensure the data directory exists
/// 2. Build the file store and HTTP client
/// 3. Restore the stored session
pub async fn run_preflight_checks(config: &StartupConfig) -> Result<StartupResult, PreflightError> {
    ensure_data_dir(config)?;

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::in_dir(config.data_dir()));
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let (session, books_api) = build_services(config, http, storage);

    let restore = session.restore().await;
    match restore {
        RestoreOutcome::Restored => info!(
            user = %session.user().map(|u| u.username).unwrap_or_default(),
            "session restored"
        ),
        RestoreOutcome::NoSession => info!("no stored session"),
        RestoreOutcome::Corrupt => warn!("stored session was unreadable and has been cleared"),
    }

    Ok(StartupResult {
        session,
        books_api,
        restore,
    })
}

/// Clear the stored session without starting the TUI (`--logout`).
pub async fn clear_stored_session(config: &StartupConfig) -> Result<(), PreflightError> {
    ensure_data_dir(config)?;
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::in_dir(config.data_dir()));
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let (session, _) = build_services(config, http, storage);
    session.logout().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, MockHttpClient};
    use crate::session::{TOKEN_KEY, USER_KEY};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_preflight_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("data");
        let config = StartupConfig::new().with_data_dir(&dir);

        let result = run_preflight_checks(&config).await.unwrap();
        assert!(dir.is_dir());
        assert_eq!(result.restore, RestoreOutcome::NoSession);
        assert!(!result.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_preflight_restores_file_session() {
        let temp = TempDir::new().unwrap();
        let config = StartupConfig::new().with_data_dir(temp.path());
        let store = FileKeyValueStore::in_dir(temp.path());
        store.set(TOKEN_KEY, "abc").await.unwrap();
        store
            .set(USER_KEY, r#"{"username":"alice","email":"alice@example.com"}"#)
            .await
            .unwrap();

        let result = run_preflight_checks(&config).await.unwrap();
        assert_eq!(result.restore, RestoreOutcome::Restored);
        assert_eq!(result.session.user().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_clear_stored_session() {
        let temp = TempDir::new().unwrap();
        let config = StartupConfig::new().with_data_dir(temp.path());
        let store = FileKeyValueStore::in_dir(temp.path());
        store.set(TOKEN_KEY, "abc").await.unwrap();

        clear_stored_session(&config).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    }

    #[test]
    fn test_ensure_data_dir_fails_on_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        let config = StartupConfig::new().with_data_dir(file.join("sub"));

        let err = ensure_data_dir(&config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create data directory"));
    }

    #[test]
    fn test_build_services_uses_base_url() {
        let config = StartupConfig::new().with_api_base_url("http://books.test/");
        let (session, books) = build_services(
            &config,
            Arc::new(MockHttpClient::new()),
            Arc::new(InMemoryStore::new()),
        );
        assert!(!session.is_authenticated());
        assert_eq!(books.base_url(), "http://books.test");
    }
}
