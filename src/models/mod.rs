mod auth;
mod book;
mod stats;

pub use auth::{AuthResponse, LoginCredentials, RegisterCredentials, User};
pub use book::{Book, CreateBook};
pub use stats::BookStats;
