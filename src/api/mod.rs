//! Backend REST API client.
//!
//! [`ApiClient`] holds the base URL, the HTTP transport and the storage the
//! bearer token is read from. [`BooksApi`] and [`AuthApi`] wrap it with the
//! typed operations.

mod auth;
mod books;
mod client;

pub use auth::AuthApi;
pub use books::BooksApi;
pub use client::{ApiClient, DEFAULT_API_URL};
