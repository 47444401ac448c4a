//! Error category classification.
//!
//! Every [`ApiError`](super::ApiError) falls into exactly one category. The
//! UI uses it to pick a colour and a hint; logging uses the short label.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The backend answered 401.
    /// Requires signing in again.
    Unauthorized,

    /// Local input check failed before any request was made.
    Validation,

    /// The backend answered with any other non-2xx status.
    Http,

    /// The backend could not be reached at all.
    Unreachable,

    /// A response or a persisted value could not be decoded.
    ParseFailure,

    /// The local session storage failed.
    Storage,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Unauthorized => "unauthorized",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Http => "http",
            ErrorCategory::Unreachable => "unreachable",
            ErrorCategory::ParseFailure => "parse",
            ErrorCategory::Storage => "storage",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Unauthorized => "Sign out with Ctrl+L and sign in again",
            ErrorCategory::Validation => "Fill in the required fields",
            ErrorCategory::Http => "Check the request and try again",
            ErrorCategory::Unreachable => "Start the backend, then refresh",
            ErrorCategory::ParseFailure => "The backend sent an unexpected response",
            ErrorCategory::Storage => "Check permissions on the data directory",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
