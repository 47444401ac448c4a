//! AppMessage enum for async communication within the application.

use super::Tab;
use crate::error::ApiResult;
use crate::models::User;
use crate::state::{BookOutcome, RequestId};

/// Messages received from spawned backend and session tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A book request issued by the panel on `tab` finished
    Book {
        tab: Tab,
        id: RequestId,
        outcome: BookOutcome,
    },
    /// Login or registration finished
    AuthFinished(ApiResult<User>),
    /// Local logout finished (storage cleared)
    LoggedOut,
}
