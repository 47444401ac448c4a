//! Mock implementations for testing.
//!
//! Test doubles for the trait seams, so the API client and session store can
//! be exercised without a network or a file system.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - In-memory key-value storage

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemoryStore;
