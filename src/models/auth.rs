use serde::{Deserialize, Serialize};

/// The signed-in user, persisted as JSON under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body returned by both the login and the register endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub username: String,
    pub email: String,
    pub token: String,
}

impl AuthResponse {
    pub fn user(&self) -> User {
        User {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}
