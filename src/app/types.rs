//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Tab`] - Which dashboard panel is mounted

/// Represents which screen is currently active.
///
/// Derived from the session, never stored: authenticated means dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

/// Dashboard sidebar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Books,
    AddBook,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Books, Tab::AddBook, Tab::Analytics];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Books => "Books",
            Tab::AddBook => "Add Book",
            Tab::Analytics => "Analytics",
        }
    }

    /// One-line description shown under the panel title.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Tab::Books => "Manage your book collection",
            Tab::AddBook => "Add a new book to the library",
            Tab::Analytics => "Overview of your library",
        }
    }

    /// Function key that selects this tab.
    pub fn key_hint(&self) -> &'static str {
        match self {
            Tab::Books => "F1",
            Tab::AddBook => "F2",
            Tab::Analytics => "F3",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Books => 0,
            Tab::AddBook => 1,
            Tab::Analytics => 2,
        }
    }

    /// Tab for a `1`-`3` key press.
    pub fn from_digit(c: char) -> Option<Tab> {
        match c {
            '1' => Some(Tab::Books),
            '2' => Some(Tab::AddBook),
            '3' => Some(Tab::Analytics),
            _ => None,
        }
    }

    /// Tab for `F1`-`F3`.
    pub fn from_function_key(n: u8) -> Option<Tab> {
        match n {
            1 => Some(Tab::Books),
            2 => Some(Tab::AddBook),
            3 => Some(Tab::Analytics),
            _ => None,
        }
    }
}
