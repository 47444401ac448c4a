//! Request ids and the backend work panels ask for.
//!
//! Panels never touch the network. They allocate an id, remember it, and
//! hand back a [`BookRequest`] for the app to run. The result comes back as
//! a [`BookOutcome`] tagged with the same id; any other id is stale.

use crate::error::ApiResult;
use crate::models::{Book, CreateBook};

pub type RequestId = u64;

/// Monotonic source of [`RequestId`]s, shared by all panels.
#[derive(Debug, Default)]
pub struct RequestCounter {
    last: RequestId,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> RequestId {
        self.last += 1;
        self.last
    }

    pub fn last_issued(&self) -> RequestId {
        self.last
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOp {
    List,
    Create(CreateBook),
    Update { id: i64, book: Book },
    Delete { id: i64 },
}

impl BookOp {
    pub fn name(&self) -> &'static str {
        match self {
            BookOp::List => "list",
            BookOp::Create(_) => "create",
            BookOp::Update { .. } => "update",
            BookOp::Delete { .. } => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRequest {
    pub id: RequestId,
    pub op: BookOp,
}

impl BookRequest {
    pub fn new(ids: &mut RequestCounter, op: BookOp) -> Self {
        Self {
            id: ids.next_id(),
            op,
        }
    }
}

/// Result of running a [`BookOp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    Listed(ApiResult<Vec<Book>>),
    Created(ApiResult<Book>),
    Updated(ApiResult<()>),
    Deleted(ApiResult<()>),
}
