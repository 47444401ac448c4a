//! Books tab: list, inline edit and delete.

use chrono::{DateTime, Local};

use super::book_form::{BookForm, FormField};
use super::requests::{BookOp, BookOutcome, BookRequest, RequestCounter, RequestId};
use crate::models::Book;

/// Inline editor for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: i64,
    pub draft: BookForm,
    pub focus: FormField,
    pub error: Option<String>,
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooksPhase {
    Loading,
    Loaded,
    Editing(EditState),
    Error(String),
}

#[derive(Debug)]
pub struct BooksPanel {
    pub books: Vec<Book>,
    pub phase: BooksPhase,
    pub selected: usize,
    /// Book id awaiting delete confirmation.
    pub confirm_delete: Option<i64>,
    /// Inline error shown above the list (failed delete).
    pub notice: Option<String>,
    pub last_loaded: Option<DateTime<Local>>,
    list_request: Option<RequestId>,
    mutation_request: Option<RequestId>,
}

impl Default for BooksPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl BooksPanel {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            phase: BooksPhase::Loading,
            selected: 0,
            confirm_delete: None,
            notice: None,
            last_loaded: None,
            list_request: None,
            mutation_request: None,
        }
    }

    /// Fresh panel state plus the initial list request.
    pub fn mount(&mut self, ids: &mut RequestCounter) -> BookRequest {
        *self = Self::new();
        self.load(ids)
    }

    fn load(&mut self, ids: &mut RequestCounter) -> BookRequest {
        let request = BookRequest::new(ids, BookOp::List);
        self.phase = BooksPhase::Loading;
        self.notice = None;
        self.confirm_delete = None;
        self.list_request = Some(request.id);
        request
    }

    /// Reload the list. Ignored while editing or waiting on a mutation.
    pub fn refresh(&mut self, ids: &mut RequestCounter) -> Option<BookRequest> {
        if self.is_editing() || self.mutation_request.is_some() {
            return None;
        }
        Some(self.load(ids))
    }

    pub fn is_loading(&self) -> bool {
        self.phase == BooksPhase::Loading
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, BooksPhase::Editing(_))
    }

    pub fn edit_state(&self) -> Option<&EditState> {
        match &self.phase {
            BooksPhase::Editing(edit) => Some(edit),
            _ => None,
        }
    }

    fn edit_state_mut(&mut self) -> Option<&mut EditState> {
        match &mut self.phase {
            BooksPhase::Editing(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }

    fn book(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn select_next(&mut self) {
        if self.phase == BooksPhase::Loaded && self.selected + 1 < self.books.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.phase == BooksPhase::Loaded {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    // ---- editing ----

    /// Open the inline editor on the selected book.
    pub fn start_edit(&mut self) -> bool {
        if self.phase != BooksPhase::Loaded || self.mutation_request.is_some() {
            return false;
        }
        let Some(book) = self.selected_book() else {
            return false;
        };
        self.phase = BooksPhase::Editing(EditState {
            id: book.id,
            draft: BookForm::from_book(book),
            focus: FormField::default(),
            error: None,
            saving: false,
        });
        self.notice = None;
        true
    }

    /// Drop the draft and go back to the list.
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.edit_state() {
            if edit.saving {
                return;
            }
            self.phase = BooksPhase::Loaded;
        }
    }

    pub fn edit_next_field(&mut self) {
        if let Some(edit) = self.edit_state_mut() {
            edit.focus = edit.focus.next();
        }
    }

    pub fn edit_prev_field(&mut self) {
        if let Some(edit) = self.edit_state_mut() {
            edit.focus = edit.focus.prev();
        }
    }

    pub fn edit_insert_char(&mut self, c: char) {
        if let Some(edit) = self.edit_state_mut() {
            if !edit.saving {
                edit.draft.insert_char(edit.focus, c);
            }
        }
    }

    pub fn edit_insert_str(&mut self, text: &str) {
        if let Some(edit) = self.edit_state_mut() {
            if !edit.saving {
                edit.draft.insert_str(edit.focus, text);
            }
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = self.edit_state_mut() {
            if !edit.saving {
                edit.draft.backspace(edit.focus);
            }
        }
    }

    /// Validate the draft and issue the update.
    ///
    /// A validation failure stays in the editor with an inline error and
    /// sends nothing.
    pub fn save_edit(&mut self, ids: &mut RequestCounter) -> Option<BookRequest> {
        let edit = self.edit_state()?;
        if edit.saving {
            return None;
        }
        let id = edit.id;

        if let Err(e) = edit.draft.validate() {
            if let Some(edit) = self.edit_state_mut() {
                edit.error = Some(e.to_string());
            }
            return None;
        }

        let Some(original) = self.book(id) else {
            if let Some(edit) = self.edit_state_mut() {
                edit.error = Some("Book is no longer in the list".to_string());
            }
            return None;
        };
        let book = edit.draft.merge_into(original);

        let request = BookRequest::new(ids, BookOp::Update { id, book });
        if let Some(edit) = self.edit_state_mut() {
            edit.error = None;
            edit.saving = true;
        }
        self.mutation_request = Some(request.id);
        Some(request)
    }

    // ---- delete ----

    /// Ask for confirmation before deleting the selected book.
    pub fn request_delete(&mut self) -> bool {
        if self.phase != BooksPhase::Loaded || self.mutation_request.is_some() {
            return false;
        }
        match self.selected_book() {
            Some(book) => {
                self.confirm_delete = Some(book.id);
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    pub fn confirm_delete(&mut self, ids: &mut RequestCounter) -> Option<BookRequest> {
        let id = self.confirm_delete.take()?;
        let request = BookRequest::new(ids, BookOp::Delete { id });
        self.notice = None;
        self.mutation_request = Some(request.id);
        Some(request)
    }

    pub fn is_mutating(&self) -> bool {
        self.mutation_request.is_some()
    }

    // ---- results ----

    /// Apply a finished request. Returns the follow-up request, if any
    /// (a successful update or delete triggers a full reload).
    pub fn apply(
        &mut self,
        id: RequestId,
        outcome: BookOutcome,
        ids: &mut RequestCounter,
    ) -> Option<BookRequest> {
        match outcome {
            BookOutcome::Listed(result) => {
                if self.list_request != Some(id) {
                    tracing::debug!(id, "dropping stale book list");
                    return None;
                }
                self.list_request = None;
                match result {
                    Ok(books) => {
                        self.books = books;
                        self.selected = self.selected.min(self.books.len().saturating_sub(1));
                        self.phase = BooksPhase::Loaded;
                        self.last_loaded = Some(Local::now());
                    }
                    Err(e) => self.phase = BooksPhase::Error(e.to_string()),
                }
                None
            }
            BookOutcome::Updated(result) => {
                if self.mutation_request != Some(id) {
                    return None;
                }
                self.mutation_request = None;
                match result {
                    Ok(()) => Some(self.load(ids)),
                    Err(e) => {
                        if let Some(edit) = self.edit_state_mut() {
                            edit.saving = false;
                            edit.error = Some(e.to_string());
                        }
                        None
                    }
                }
            }
            BookOutcome::Deleted(result) => {
                if self.mutation_request != Some(id) {
                    return None;
                }
                self.mutation_request = None;
                match result {
                    Ok(()) => Some(self.load(ids)),
                    Err(e) => {
                        self.notice = Some(e.to_string());
                        None
                    }
                }
            }
            BookOutcome::Created(_) => None,
        }
    }
}
