//! Login and registration endpoints.

use super::client::{ApiClient, Method};
use crate::error::{ApiAction, ApiResult};
use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials};

const LOGIN_PATH: &str = "/api/Auth/login";
const REGISTER_PATH: &str = "/api/Auth/register";

/// Client for the authentication endpoints. Requests never carry a token.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /api/Auth/login
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        let action = ApiAction::Login;
        let body = ApiClient::encode(action, credentials)?;
        let response = self
            .client
            .send(action, Method::Post, LOGIN_PATH, Some(body), false)
            .await?;
        ApiClient::decode(action, &response)
    }

    /// POST /api/Auth/register
    pub async fn register(&self, credentials: &RegisterCredentials) -> ApiResult<AuthResponse> {
        let action = ApiAction::Register;
        let body = ApiClient::encode(action, credentials)?;
        let response = self
            .client
            .send(action, Method::Post, REGISTER_PATH, Some(body), false)
            .await?;
        ApiClient::decode(action, &response)
    }
}
