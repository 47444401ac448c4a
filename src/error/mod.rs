//! Error handling for bookshelf.
//!
//! - **Error Categories**: the taxonomy the UI reacts to
//! - **ApiError**: normalised failure of a backend or session operation,
//!   whose `Display` is the exact inline message
//! - **ApiAction**: which operation failed, selecting the 401 and fallback
//!   messages
//!
//! # Error Categories
//!
//! | Category | Raised when |
//! |----------|-------------|
//! | Unauthorized | The backend answered 401 |
//! | Validation | A required field is empty; no request was made |
//! | Http | Any other non-2xx status |
//! | Unreachable | The connection to the backend failed |
//! | ParseFailure | A response body could not be decoded |
//! | Storage | Reading or writing the session storage failed |

mod api;
mod category;

pub use api::{ApiAction, ApiError};
pub use category::ErrorCategory;

/// Result alias for API and session operations.
pub type ApiResult<T> = Result<T, ApiError>;
