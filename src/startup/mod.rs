//! Startup module for pre-flight initialization with dependency injection.
//!
//! # Components
//!
//! - [`config`] - Layered startup configuration
//! - [`preflight`] - Data directory, adapters and session restore
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::startup::{run_preflight_checks, StartupConfig};
//!
//! let config = StartupConfig::from_env();
//! let result = runtime.block_on(run_preflight_checks(&config))?;
//! // result.session is restored, result.books_api is ready for the TUI
//! ```

pub mod config;
pub mod preflight;

pub use config::{StartupConfig, StartupResult};
pub use preflight::{build_services, clear_stored_session, run_preflight_checks, PreflightError};
