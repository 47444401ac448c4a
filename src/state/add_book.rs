//! Add Book tab: a single draft and its submission.

use super::book_form::{BookForm, FormField};
use super::requests::{BookOp, BookOutcome, BookRequest, RequestCounter, RequestId};
use crate::models::Book;

/// What the app should do after a create result arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Not the result this panel was waiting for.
    Ignored,
    /// The error is now shown inline.
    Failed,
    /// Switch to the books tab and reload it.
    Created(Book),
}

#[derive(Debug, Default)]
pub struct AddBookPanel {
    pub draft: BookForm,
    pub focus: FormField,
    pub error: Option<String>,
    pending: Option<RequestId>,
}

impl AddBookPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh, empty draft.
    pub fn mount(&mut self) {
        *self = Self::new();
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.is_submitting() {
            self.draft.insert_char(self.focus, c);
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        if !self.is_submitting() {
            self.draft.insert_str(self.focus, text);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_submitting() {
            self.draft.backspace(self.focus);
        }
    }

    /// Reset the draft and error without submitting.
    pub fn clear(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.draft.clear();
        self.error = None;
        self.focus = FormField::default();
    }

    /// Validate and issue the create request. Validation failures never
    /// reach the network.
    pub fn submit(&mut self, ids: &mut RequestCounter) -> Option<BookRequest> {
        if self.is_submitting() {
            return None;
        }
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        let request = BookRequest::new(ids, BookOp::Create(self.draft.to_create()));
        self.error = None;
        self.pending = Some(request.id);
        Some(request)
    }

    pub fn apply(&mut self, id: RequestId, outcome: BookOutcome) -> AddOutcome {
        if self.pending != Some(id) {
            return AddOutcome::Ignored;
        }
        let BookOutcome::Created(result) = outcome else {
            return AddOutcome::Ignored;
        };
        self.pending = None;

        match result {
            Ok(book) => {
                self.draft.clear();
                self.focus = FormField::default();
                AddOutcome::Created(book)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                AddOutcome::Failed
            }
        }
    }
}
