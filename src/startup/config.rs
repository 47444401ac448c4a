//! Startup configuration types.
//!
//! Values are layered: built-in defaults, then `BOOKSHELF_*` environment
//! variables, then command-line overrides.

use std::path::{Path, PathBuf};

use crate::adapters::file_storage::STORAGE_FILE;
use crate::api::{BooksApi, DEFAULT_API_URL};
use crate::cli::CliOverrides;
use crate::session::{RestoreOutcome, SessionStore};

/// Environment variable for the backend base URL
pub const ENV_API_URL: &str = "BOOKSHELF_API_URL";
/// Environment variable for the data directory
pub const ENV_DATA_DIR: &str = "BOOKSHELF_DATA_DIR";
/// Environment variable for the log filter (`tracing_subscriber::EnvFilter` syntax)
pub const ENV_LOG: &str = "BOOKSHELF_LOG";

/// Default data directory name under the home directory
const DATA_DIR_NAME: &str = ".bookshelf";
/// Log file name inside the data directory
pub const LOG_FILE: &str = "bookshelf.log";

/// Configuration for the startup process.
///
/// # Example
///
/// ```ignore
/// use bookshelf::startup::StartupConfig;
///
/// let config = StartupConfig::from_env()
///     .with_api_base_url("http://books.internal:8080/");
/// assert_eq!(config.api_base_url, "http://books.internal:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Backend base URL, without a trailing `/`
    pub api_base_url: String,
    /// Directory holding `storage.json` and the log file
    pub data_dir: PathBuf,
    /// Log filter directive
    pub log_filter: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            log_filter: "info".to_string(),
        }
    }
}

/// `~/.bookshelf`, or `./.bookshelf` when there is no home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing `/` is dropped.
    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = trim_base_url(url.as_ref());
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns. Empty values are
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            config = config.with_data_dir(dir);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        config
    }

    /// Apply command-line overrides on top.
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.api_url {
            self = self.with_api_base_url(url);
        }
        if let Some(dir) = &overrides.data_dir {
            self = self.with_data_dir(dir);
        }
        self
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Result of successful preflight checks.
///
/// Contains everything the TUI needs to start.
pub struct StartupResult {
    /// Session store, already restored
    pub session: SessionStore,
    /// Book catalog client sharing the session's storage
    pub books_api: BooksApi,
    /// What the restore found
    pub restore: RestoreOutcome,
}
