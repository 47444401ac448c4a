//! Errors raised by the API client and the session store.

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::{HttpError, StorageError};

/// The backend operation an error belongs to.
///
/// Each operation has its own 401 message and its own fallback message for
/// failures that carry no text of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    ListBooks,
    CreateBook,
    UpdateBook,
    DeleteBook,
    Login,
    Register,
}

impl ApiAction {
    pub fn unauthorized_message(&self) -> &'static str {
        match self {
            ApiAction::ListBooks => "Unauthorized: Please log in to access books.",
            ApiAction::CreateBook => "Unauthorized: Please log in to create books.",
            ApiAction::UpdateBook => "Unauthorized: Please log in to update books.",
            ApiAction::DeleteBook => "Unauthorized: Please log in to delete books.",
            ApiAction::Login => "Invalid username or password.",
            ApiAction::Register => "Unauthorized: Registration was rejected.",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiAction::ListBooks => "Failed to fetch books",
            ApiAction::CreateBook => "Failed to create book",
            ApiAction::UpdateBook => "Failed to update book",
            ApiAction::DeleteBook => "Failed to delete book",
            ApiAction::Login => "Login failed",
            ApiAction::Register => "Registration failed",
        }
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAction::ListBooks => "list_books",
            ApiAction::CreateBook => "create_book",
            ApiAction::UpdateBook => "update_book",
            ApiAction::DeleteBook => "delete_book",
            ApiAction::Login => "login",
            ApiAction::Register => "register",
        }
    }
}

/// Normalised failure of a backend operation.
///
/// `Display` yields the exact text shown inline in the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{}", .action.unauthorized_message())]
    Unauthorized { action: ApiAction },

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Failed to connect to backend at {base_url}. Make sure the backend is running.")]
    Unreachable { base_url: String },

    #[error("{message}")]
    Parse { action: ApiAction, message: String },

    #[error("{0}")]
    Storage(String),

    #[error("{message}")]
    Other { action: ApiAction, message: String },
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// 401 maps to the operation's unauthorized message; anything else
    /// carries the response body, or `Request failed: <status>` when the
    /// body is empty.
    pub fn from_status(action: ApiAction, status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized { action };
        }

        let message = if body.is_empty() {
            format!("Request failed: {}", status)
        } else {
            body.to_string()
        };
        ApiError::Http { status, message }
    }

    /// Build the error for a transport failure.
    pub fn from_transport(action: ApiAction, base_url: &str, err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(_) => ApiError::Unreachable {
                base_url: base_url.to_string(),
            },
            other => ApiError::other(action, other.to_string()),
        }
    }

    /// Build the error for an undecodable response body.
    pub fn parse(action: ApiAction, err: impl std::fmt::Display) -> Self {
        ApiError::Parse {
            action,
            message: format!("{}: {}", action.fallback_message(), err),
        }
    }

    /// Any other failure; an empty message becomes the operation's fallback.
    pub fn other(action: ApiAction, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            action.fallback_message().to_string()
        } else {
            message
        };
        ApiError::Other { action, message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Unauthorized { .. } => ErrorCategory::Unauthorized,
            ApiError::Validation(_) => ErrorCategory::Validation,
            ApiError::Http { .. } | ApiError::Other { .. } => ErrorCategory::Http,
            ApiError::Unreachable { .. } => ErrorCategory::Unreachable,
            ApiError::Parse { .. } => ErrorCategory::ParseFailure,
            ApiError::Storage(_) => ErrorCategory::Storage,
        }
    }

    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_messages_per_action() {
        let cases = [
            (ApiAction::ListBooks, "Unauthorized: Please log in to access books."),
            (ApiAction::CreateBook, "Unauthorized: Please log in to create books."),
            (ApiAction::UpdateBook, "Unauthorized: Please log in to update books."),
            (ApiAction::DeleteBook, "Unauthorized: Please log in to delete books."),
            (ApiAction::Login, "Invalid username or password."),
            (ApiAction::Register, "Unauthorized: Registration was rejected."),
        ];

        for (action, expected) in cases {
            let err = ApiError::from_status(action, 401, "ignored body");
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.category(), ErrorCategory::Unauthorized);
            assert_eq!(err.status(), Some(401));
        }
    }

    #[test]
    fn test_status_with_body_uses_body() {
        let err = ApiError::from_status(ApiAction::CreateBook, 400, "Title is required");
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.category(), ErrorCategory::Http);
    }

    #[test]
    fn test_status_without_body() {
        let err = ApiError::from_status(ApiAction::ListBooks, 500, "");
        assert_eq!(err.to_string(), "Request failed: 500");
    }

    #[test]
    fn test_whitespace_body_is_kept() {
        let err = ApiError::from_status(ApiAction::DeleteBook, 404, "  \n");
        assert_eq!(err.to_string(), "  \n");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_connection_failure_quotes_base_url() {
        let err = ApiError::from_transport(
            ApiAction::ListBooks,
            "http://localhost:5000",
            HttpError::ConnectionFailed("refused".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Failed to connect to backend at http://localhost:5000. Make sure the backend is running."
        );
        assert_eq!(err.category(), ErrorCategory::Unreachable);
    }

    #[test]
    fn test_other_transport_error_keeps_message() {
        let err = ApiError::from_transport(
            ApiAction::DeleteBook,
            "http://localhost:5000",
            HttpError::Timeout("30s".to_string()),
        );
        assert_eq!(err.to_string(), "Request timeout: 30s");
    }

    #[test]
    fn test_other_falls_back_when_empty() {
        assert_eq!(
            ApiError::other(ApiAction::UpdateBook, "").to_string(),
            "Failed to update book"
        );
        assert_eq!(
            ApiError::other(ApiAction::Register, " ").to_string(),
            "Registration failed"
        );
    }

    #[test]
    fn test_parse_error_prefixed_with_fallback() {
        let err = ApiError::parse(ApiAction::ListBooks, "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to fetch books: expected value at line 1"
        );
        assert_eq!(err.category(), ErrorCategory::ParseFailure);
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: ApiError = StorageError::WriteFailed("disk full".to_string()).into();
        assert_eq!(err.to_string(), "Failed to write storage: disk full");
        assert_eq!(err.category(), ErrorCategory::Storage);
    }
}
