//! Trait abstractions for dependency injection and testability.
//!
//! The two collaborators the client talks to, the REST backend and the
//! persistent key-value storage, sit behind these traits so the API client
//! and the session store can be driven by mocks in tests.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP operations (GET, POST, PUT, DELETE)
//! - [`KeyValueStore`] - String key-value persistence

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{KeyValueStore, StorageError};
