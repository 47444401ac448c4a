//! Configuration layering through the real process environment.
//!
//! Environment variables are process-global, so these tests run serially.

mod common;

use serial_test::serial;
use tempfile::TempDir;

use bookshelf::adapters::FileKeyValueStore;
use bookshelf::cli::{parse_args, CliCommand};
use bookshelf::session::{RestoreOutcome, TOKEN_KEY, USER_KEY};
use bookshelf::startup::config::{ENV_API_URL, ENV_DATA_DIR, ENV_LOG};
use bookshelf::startup::{clear_stored_session, run_preflight_checks, StartupConfig};
use bookshelf::traits::KeyValueStore;

use common::{ALICE_JSON, TEST_TOKEN};

/// Sets variables for the duration of a test and removes them on drop.
struct EnvGuard(Vec<&'static str>);

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.0 {
            std::env::remove_var(key);
        }
    }
}

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    list.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    let _env = EnvGuard::set(&[
        (ENV_API_URL, "http://books.test:8080/"),
        (ENV_DATA_DIR, "/tmp/bookshelf-env"),
        (ENV_LOG, "bookshelf=debug"),
    ]);

    let config = StartupConfig::from_env();
    assert_eq!(config.api_base_url, "http://books.test:8080");
    assert_eq!(config.data_dir().to_str(), Some("/tmp/bookshelf-env"));
    assert_eq!(config.log_filter, "bookshelf=debug");
}

#[test]
#[serial]
fn test_cli_overrides_beat_env() {
    let _env = EnvGuard::set(&[(ENV_API_URL, "http://from-env:1")]);

    let CliCommand::RunTui(overrides) = parse_args(args(&["bookshelf", "--api-url", "http://from-cli:2"]))
    else {
        panic!("expected RunTui");
    };
    let config = StartupConfig::from_env().with_overrides(&overrides);
    assert_eq!(config.api_base_url, "http://from-cli:2");
}

#[test]
#[serial]
fn test_empty_variable_keeps_default() {
    let _env = EnvGuard::set(&[(ENV_API_URL, "")]);
    assert_eq!(
        StartupConfig::from_env().api_base_url,
        StartupConfig::new().api_base_url
    );
}

#[tokio::test]
#[serial]
async fn test_preflight_restores_from_env_data_dir() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::in_dir(dir.path());
    store.set(TOKEN_KEY, TEST_TOKEN).await.unwrap();
    store.set(USER_KEY, ALICE_JSON).await.unwrap();

    let _env = EnvGuard::set(&[(ENV_DATA_DIR, dir.path().to_str().unwrap())]);
    let config = StartupConfig::from_env();

    let result = run_preflight_checks(&config).await.unwrap();
    assert_eq!(result.restore, RestoreOutcome::Restored);
    assert_eq!(result.session.user().unwrap().username, "alice");

    clear_stored_session(&config).await.unwrap();
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
}
