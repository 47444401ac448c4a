//! CLI module for bookshelf.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use bookshelf::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::RunTui(overrides) => { /* start the TUI */ }
//!     other => { /* print and exit */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, USAGE};
pub use version::{version_line, VERSION};
