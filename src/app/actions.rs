//! Spawned backend and session work.
//!
//! Each method clones what the task needs, runs it on the tokio runtime and
//! reports back through `message_tx`. Nothing here touches panel state.

use tracing::{debug, warn};

use super::{App, AppMessage, Tab};
use crate::state::{AuthRequest, BookOp, BookOutcome, BookRequest};

impl App {
    /// Run a panel's book request in the background.
    pub(crate) fn spawn_book_request(&self, tab: Tab, request: BookRequest) {
        let api = self.books_api.clone();
        let tx = self.message_tx.clone();
        let BookRequest { id, op } = request;
        debug!(id, op = op.name(), tab = tab.title(), "spawning book request");

        tokio::spawn(async move {
            let outcome = match op {
                BookOp::List => BookOutcome::Listed(api.list().await),
                BookOp::Create(book) => BookOutcome::Created(api.create(&book).await),
                BookOp::Update { id: book_id, book } => {
                    BookOutcome::Updated(api.update(book_id, &book).await)
                }
                BookOp::Delete { id: book_id } => BookOutcome::Deleted(api.delete(book_id).await),
            };
            if tx.send(AppMessage::Book { tab, id, outcome }).is_err() {
                debug!(id, "app closed before book request finished");
            }
        });
    }

    /// Run a login or registration in the background.
    pub(crate) fn spawn_auth(&self, request: AuthRequest) {
        let session = self.session.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = match request {
                AuthRequest::Login(credentials) => session.login(credentials).await,
                AuthRequest::Register(credentials) => session.register(credentials).await,
            };
            if let Err(e) = &result {
                warn!(category = %e.category(), error = %e, "authentication failed");
            }
            let _ = tx.send(AppMessage::AuthFinished(result));
        });
    }

    /// Clear the stored session in the background.
    pub(crate) fn spawn_logout(&self) {
        let session = self.session.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            session.logout().await;
            let _ = tx.send(AppMessage::LoggedOut);
        });
    }
}
