//! String-backed draft of a book record.
//!
//! Used by both the add panel and the inline editor in the books panel.

use crate::error::ApiError;
use crate::models::{Book, CreateBook};

/// Longest accepted input for available copies (keeps the value inside `i32`).
const MAX_COPIES_DIGITS: usize = 9;

/// A field of [`BookForm`], in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Description,
    Isbn,
    PublishedDate,
    AvailableCopies,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Author,
        FormField::Description,
        FormField::Isbn,
        FormField::PublishedDate,
        FormField::AvailableCopies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Description => "Description",
            FormField::Isbn => "ISBN",
            FormField::PublishedDate => "Published Date",
            FormField::AvailableCopies => "Available Copies",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Title => "Enter book title",
            FormField::Author => "Enter author name",
            FormField::Description => "Optional description",
            FormField::Isbn => "e.g. 978-0441013593",
            FormField::PublishedDate => "YYYY-MM-DD",
            FormField::AvailableCopies => "0",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Title | FormField::Author)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub isbn: String,
    pub published_date: String,
    pub available_copies: String,
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft copy of an existing record.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone().unwrap_or_default(),
            isbn: book.isbn.clone().unwrap_or_default(),
            published_date: book.published_date.clone().unwrap_or_default(),
            available_copies: book
                .available_copies
                .map(|c| c.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Description => &self.description,
            FormField::Isbn => &self.isbn,
            FormField::PublishedDate => &self.published_date,
            FormField::AvailableCopies => &self.available_copies,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Description => &mut self.description,
            FormField::Isbn => &mut self.isbn,
            FormField::PublishedDate => &mut self.published_date,
            FormField::AvailableCopies => &mut self.available_copies,
        }
    }

    /// Append a character. Available copies only takes digits.
    ///
    /// Returns false when the character was rejected.
    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        if field == FormField::AvailableCopies
            && (!c.is_ascii_digit() || self.available_copies.len() >= MAX_COPIES_DIGITS)
        {
            return false;
        }
        self.value_mut(field).push(c);
        true
    }

    /// Append pasted text, dropping characters the field rejects.
    pub fn insert_str(&mut self, field: FormField, text: &str) {
        for c in text.chars() {
            self.insert_char(field, c);
        }
    }

    pub fn backspace(&mut self, field: FormField) {
        self.value_mut(field).pop();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check the required fields. Whitespace alone does not count.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("Title is required"));
        }
        if self.author.trim().is_empty() {
            return Err(ApiError::validation("Author is required"));
        }
        Ok(())
    }

    fn copies(&self) -> Option<i32> {
        self.available_copies.parse().ok()
    }

    /// Creation payload: title and author trimmed, empty optional fields omitted.
    pub fn to_create(&self) -> CreateBook {
        CreateBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: non_empty(&self.description),
            isbn: non_empty(&self.isbn),
            published_date: non_empty(&self.published_date),
            available_copies: self.copies(),
        }
    }

    /// The full record to send on update: the draft over `original`, keeping its id.
    ///
    /// Optional fields the user left as loaded keep the original value, even
    /// when it is blank.
    pub fn merge_into(&self, original: &Book) -> Book {
        let created = self.to_create();
        let optional = |draft: &str, before: &Option<String>, edited: Option<String>| {
            if draft == before.as_deref().unwrap_or_default() {
                before.clone()
            } else {
                edited
            }
        };
        let copies_unchanged = self.available_copies
            == original
                .available_copies
                .map(|c| c.to_string())
                .unwrap_or_default();

        Book {
            id: original.id,
            title: created.title,
            author: created.author,
            description: optional(&self.description, &original.description, created.description),
            isbn: optional(&self.isbn, &original.isbn, created.isbn),
            published_date: optional(
                &self.published_date,
                &original.published_date,
                created.published_date,
            ),
            available_copies: if copies_unchanged {
                original.available_copies
            } else {
                created.available_copies
            },
        }
    }
}
