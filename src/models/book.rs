use serde::{Deserialize, Serialize};

/// A book record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    /// Date as sent by the backend, usually `YYYY-MM-DD` or an ISO timestamp.
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub available_copies: Option<i32>,
}

impl Book {
    /// Attach a server-assigned id to a creation payload.
    pub fn from_create(id: i64, book: CreateBook) -> Self {
        Self {
            id,
            title: book.title,
            author: book.author,
            description: book.description,
            isbn: book.isbn,
            published_date: book.published_date,
            available_copies: book.available_copies,
        }
    }

    /// The date part of `published_date`, for display.
    pub fn published_day(&self) -> Option<&str> {
        self.published_date
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d))
            .filter(|d| !d.is_empty())
    }

    /// Whether the description has any non-whitespace content.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }
}

/// Creation payload: a book without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub available_copies: Option<i32>,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Dune",
            "author": "Frank Herbert",
            "description": null,
            "isbn": "9780441013593",
            "publishedDate": "1965-08-01T00:00:00",
            "availableCopies": 3
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.isbn.as_deref(), Some("9780441013593"));
        assert_eq!(book.available_copies, Some(3));
        assert_eq!(book.published_day(), Some("1965-08-01"));
        assert!(book.description.is_none());
    }

    #[test]
    fn test_book_missing_optional_fields() {
        let book: Book =
            serde_json::from_str(r#"{"id":1,"title":"T","author":"A"}"#).unwrap();
        assert!(book.isbn.is_none());
        assert!(book.published_date.is_none());
        assert!(book.available_copies.is_none());
        assert!(book.published_day().is_none());
    }

    #[test]
    fn test_create_book_serializes_camel_case() {
        let payload = CreateBook {
            available_copies: Some(2),
            published_date: Some("2020-01-02".to_string()),
            ..CreateBook::new("Dune", "Frank Herbert")
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["availableCopies"], 2);
        assert_eq!(value["publishedDate"], "2020-01-02");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_has_description() {
        let mut book = Book::from_create(1, CreateBook::new("T", "A"));
        assert!(!book.has_description());

        book.description = Some("   ".to_string());
        assert!(!book.has_description());

        book.description = Some(" classic ".to_string());
        assert!(book.has_description());
    }
}
