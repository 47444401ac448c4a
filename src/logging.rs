//! File logging.
//!
//! The TUI owns stdout, so `tracing` output goes to `<data dir>/bookshelf.log`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Build the filter, falling back to `info` when `directive` does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// A second call (tests, or a subscriber already set) is not an error.
pub fn init_logging(path: &Path, directive: &str) -> io::Result<()> {
    let file = open_log_file(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            log = %path.display(),
            "logging initialized"
        );
    }
    Ok(())
}
