//! Screen and panel state.
//!
//! Each panel owns its state and is driven by plain method calls, so the
//! state machines are testable without a terminal or a network:
//! - [`LoginForm`]: sign-in / sign-up form
//! - [`BooksPanel`]: list, inline edit, delete confirmation
//! - [`AddBookPanel`]: creation draft
//! - [`AnalyticsPanel`]: aggregate counts
//!
//! Backend work leaves a panel as a [`BookRequest`] and returns as a
//! [`BookOutcome`] carrying the same [`RequestId`].

pub mod add_book;
pub mod analytics;
pub mod book_form;
pub mod books;
pub mod login;
pub mod requests;

pub use add_book::{AddBookPanel, AddOutcome};
pub use analytics::{AnalyticsPanel, AnalyticsPhase};
pub use book_form::{BookForm, FormField};
pub use books::{BooksPanel, BooksPhase, EditState};
pub use login::{AuthRequest, LoginField, LoginForm, LoginMode};
pub use requests::{BookOp, BookOutcome, BookRequest, RequestCounter, RequestId};
