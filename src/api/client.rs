//! Shared request plumbing for the backend API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiAction, ApiError, ApiResult};
use crate::session::TOKEN_KEY;
use crate::traits::{Headers, HttpClient, KeyValueStore, Response};

/// Default backend URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Base URL, transport and token source shared by [`BooksApi`](super::BooksApi)
/// and [`AuthApi`](super::AuthApi).
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    storage: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Create a client. A trailing `/` on `base_url` is dropped.
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The stored bearer token, if any. A storage read failure counts as no token.
    async fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read token, sending request without it");
                None
            }
        }
    }

    async fn headers(&self, with_auth: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if with_auth {
            if let Some(token) = self.token().await {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }
        headers
    }

    /// Send a request and turn transport failures and non-2xx statuses into
    /// [`ApiError`]s.
    pub(crate) async fn send(
        &self,
        action: ApiAction,
        method: Method,
        path: &str,
        body: Option<String>,
        with_auth: bool,
    ) -> ApiResult<Response> {
        let url = self.url(path);
        let headers = self.headers(with_auth).await;
        let body = body.unwrap_or_default();

        tracing::debug!(action = action.as_str(), method = method.as_str(), %url, "sending request");

        let result = match method {
            Method::Get => self.http.get(&url, &headers).await,
            Method::Post => self.http.post(&url, &body, &headers).await,
            Method::Put => self.http.put(&url, &body, &headers).await,
            Method::Delete => self.http.delete(&url, &headers).await,
        };

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(action = action.as_str(), error = %e, "request failed");
                return Err(ApiError::from_transport(action, &self.base_url, e));
            }
        };

        if !response.is_success() {
            let text = response.text();
            tracing::warn!(action = action.as_str(), status = response.status, "backend returned an error");
            return Err(ApiError::from_status(action, response.status, &text));
        }

        Ok(response)
    }

    pub(crate) fn encode<T: Serialize>(action: ApiAction, value: &T) -> ApiResult<String> {
        serde_json::to_string(value).map_err(|e| ApiError::other(action, e.to_string()))
    }

    pub(crate) fn decode<T: DeserializeOwned>(action: ApiAction, response: &Response) -> ApiResult<T> {
        response.json().map_err(|e| ApiError::parse(action, e))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
