//! bookshelf - a terminal client for a book catalog backend
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
