//! Client-side session: the signed-in user and their bearer token.
//!
//! [`SessionStore`] is a cheap cloneable handle. It is the only code that
//! writes the `token` and `user` storage keys, and only from
//! [`login`](SessionStore::login), [`register`](SessionStore::register),
//! [`logout`](SessionStore::logout) and [`restore`](SessionStore::restore).

use std::sync::{Arc, PoisonError, RwLock};

use crate::api::AuthApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials, User};
use crate::traits::{KeyValueStore, StorageError};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded [`User`].
pub const USER_KEY: &str = "user";

/// An authenticated user together with their token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Lifecycle of the session.
///
/// `Authenticated` is the only state carrying a user and a token, so
/// "authenticated" and "both present" cannot disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Uninitialized,
    Restoring,
    Authenticated(Session),
    Unauthenticated,
}

/// Result of [`SessionStore::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Both keys were present and valid.
    Restored,
    /// Nothing usable was stored.
    NoSession,
    /// The stored user could not be decoded; both keys were removed.
    Corrupt,
}

#[derive(Clone)]
pub struct SessionStore {
    status: Arc<RwLock<SessionStatus>>,
    storage: Arc<dyn KeyValueStore>,
    auth: AuthApi,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, auth: AuthApi) -> Self {
        Self {
            status: Arc::new(RwLock::new(SessionStatus::Uninitialized)),
            storage,
            auth,
        }
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        match self.status() {
            SessionStatus::Authenticated(session) => Some(session.user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            *self.status.read().unwrap_or_else(PoisonError::into_inner),
            SessionStatus::Authenticated(_)
        )
    }

    fn set_status(&self, status: SessionStatus) {
        *self.status.write().unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Load a previously persisted session.
    ///
    /// Never fails: unreadable storage leaves the session signed out, and an
    /// undecodable user clears both keys.
    pub async fn restore(&self) -> RestoreOutcome {
        self.set_status(SessionStatus::Restoring);

        let stored = match (self.storage.get(TOKEN_KEY).await, self.storage.get(USER_KEY).await) {
            (Ok(Some(token)), Ok(Some(user))) => Some((token, user)),
            (Ok(_), Ok(_)) => None,
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "could not read stored session");
                self.set_status(SessionStatus::Unauthenticated);
                return RestoreOutcome::NoSession;
            }
        };

        let Some((token, user_json)) = stored else {
            self.set_status(SessionStatus::Unauthenticated);
            return RestoreOutcome::NoSession;
        };

        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => {
                tracing::info!(username = %user.username, "restored session");
                self.set_status(SessionStatus::Authenticated(Session { user, token }));
                RestoreOutcome::Restored
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored user is malformed, clearing session");
                self.clear_storage().await;
                self.set_status(SessionStatus::Unauthenticated);
                RestoreOutcome::Corrupt
            }
        }
    }

    /// Sign in. On failure the session stays signed out and the error is
    /// returned for display.
    pub async fn login(&self, credentials: LoginCredentials) -> ApiResult<User> {
        let result = self.auth.login(&credentials).await;
        self.establish(result).await
    }

    /// Create an account and sign in with it.
    pub async fn register(&self, credentials: RegisterCredentials) -> ApiResult<User> {
        let result = self.auth.register(&credentials).await;
        self.establish(result).await
    }

    async fn establish(&self, result: ApiResult<AuthResponse>) -> ApiResult<User> {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.set_status(SessionStatus::Unauthenticated);
                return Err(e);
            }
        };

        let user = response.user();
        let user_json = serde_json::to_string(&user)
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        if let Err(e) = self.persist(&response.token, &user_json).await {
            self.set_status(SessionStatus::Unauthenticated);
            return Err(e.into());
        }

        tracing::info!(username = %user.username, "signed in");
        self.set_status(SessionStatus::Authenticated(Session {
            user: user.clone(),
            token: response.token,
        }));
        Ok(user)
    }

    async fn persist(&self, token: &str, user_json: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token).await?;
        self.storage.set(USER_KEY, user_json).await
    }

    /// Sign out locally. No server call is made.
    pub async fn logout(&self) {
        self.clear_storage().await;
        self.set_status(SessionStatus::Unauthenticated);
        tracing::info!("signed out");
    }

    async fn clear_storage(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key).await {
                tracing::warn!(key, error = %e, "could not remove stored session key");
            }
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}
