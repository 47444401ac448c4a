use std::collections::HashSet;

use super::Book;

/// Aggregate counts shown by the analytics panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookStats {
    pub total_books: usize,
    /// Distinct author strings, compared exactly.
    pub unique_authors: usize,
    /// Books whose description is non-blank after trimming.
    pub with_description: usize,
}

impl BookStats {
    pub fn from_books(books: &[Book]) -> Self {
        let authors: HashSet<&str> = books.iter().map(|b| b.author.as_str()).collect();

        Self {
            total_books: books.len(),
            unique_authors: authors.len(),
            with_description: books.iter().filter(|b| b.has_description()).count(),
        }
    }
}
