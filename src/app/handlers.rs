//! Key, paste and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::{App, AppMessage, Screen, Tab};
use crate::state::{AddOutcome, BookOutcome, RequestId};

/// A printable character without Ctrl/Alt.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::Book { tab, id, outcome } => self.apply_book_outcome(tab, id, outcome),
            AppMessage::AuthFinished(result) => match result {
                Ok(user) => {
                    info!(username = %user.username, "entering dashboard");
                    self.login.reset();
                    self.enter_dashboard();
                }
                Err(e) => self.login.fail(e.to_string()),
            },
            AppMessage::LoggedOut => {
                self.reset_dashboard();
                self.login.reset();
            }
        }
    }

    fn apply_book_outcome(&mut self, tab: Tab, id: RequestId, outcome: BookOutcome) {
        if self.screen() != Screen::Dashboard {
            debug!(id, "dropping book result after logout");
            return;
        }
        match tab {
            Tab::Books => {
                if let Some(request) = self.books.apply(id, outcome, &mut self.requests) {
                    self.spawn_book_request(Tab::Books, request);
                }
            }
            Tab::AddBook => {
                if let AddOutcome::Created(book) = self.add_book.apply(id, outcome) {
                    info!(id = book.id, title = %book.title, "book created");
                    self.tab = Tab::Books;
                    let request = self.books.mount(&mut self.requests);
                    self.spawn_book_request(Tab::Books, request);
                }
            }
            Tab::Analytics => self.analytics.apply(id, outcome),
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if is_ctrl(&key, 'c') {
            self.quit();
            return;
        }

        match self.screen() {
            Screen::Login => self.handle_login_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    /// Handle bracketed paste into whichever field has focus.
    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        let text = text.replace(['\r', '\n'], " ");
        match self.screen() {
            Screen::Login => self.login.insert_str(&text),
            Screen::Dashboard => match self.tab {
                Tab::Books => self.books.edit_insert_str(&text),
                Tab::AddBook => self.add_book.insert_str(&text),
                Tab::Analytics => {}
            },
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.is_restoring() {
            return;
        }
        if is_ctrl(&key, 't') {
            self.login.toggle_mode();
            return;
        }
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Down => self.login.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.login.prev_field(),
            KeyCode::Enter => {
                if let Some(request) = self.login.submit() {
                    self.spawn_auth(request);
                }
            }
            KeyCode::Backspace => self.login.backspace(),
            _ => {
                if let Some(c) = typed_char(&key) {
                    self.login.insert_char(c);
                }
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'l') {
            info!("logging out");
            self.spawn_logout();
            return;
        }
        if let KeyCode::F(n) = key.code {
            if let Some(tab) = Tab::from_function_key(n) {
                self.switch_tab(tab);
            }
            return;
        }

        match self.tab {
            Tab::Books => self.handle_books_key(key),
            Tab::AddBook => self.handle_add_book_key(key),
            Tab::Analytics => self.handle_analytics_key(key),
        }
    }

    /// Keys shared by the non-editing panels: `1`-`3` and `q`.
    fn handle_browse_key(&mut self, key: &KeyEvent) -> bool {
        match typed_char(key) {
            Some('q') => {
                self.quit();
                true
            }
            Some(c) => match Tab::from_digit(c) {
                Some(tab) => {
                    self.switch_tab(tab);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    fn handle_books_key(&mut self, key: KeyEvent) {
        if self.books.confirm_delete.is_some() {
            match (key.code, typed_char(&key)) {
                (_, Some('y')) | (_, Some('Y')) => {
                    if let Some(request) = self.books.confirm_delete(&mut self.requests) {
                        self.spawn_book_request(Tab::Books, request);
                    }
                }
                (_, Some('n')) | (_, Some('N')) | (KeyCode::Esc, _) => self.books.cancel_delete(),
                _ => {}
            }
            return;
        }

        if self.books.is_editing() {
            match key.code {
                KeyCode::Esc => self.books.cancel_edit(),
                KeyCode::Tab | KeyCode::Down => self.books.edit_next_field(),
                KeyCode::BackTab | KeyCode::Up => self.books.edit_prev_field(),
                KeyCode::Enter => {
                    if let Some(request) = self.books.save_edit(&mut self.requests) {
                        self.spawn_book_request(Tab::Books, request);
                    }
                }
                KeyCode::Backspace => self.books.edit_backspace(),
                _ => {
                    if let Some(c) = typed_char(&key) {
                        self.books.edit_insert_char(c);
                    }
                }
            }
            return;
        }

        if self.handle_browse_key(&key) {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.books.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.books.select_next(),
            KeyCode::Char('r') => {
                if let Some(request) = self.books.refresh(&mut self.requests) {
                    self.spawn_book_request(Tab::Books, request);
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                self.books.start_edit();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.books.request_delete();
            }
            _ => {}
        }
    }

    fn handle_add_book_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'x') {
            self.add_book.clear();
            return;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.add_book.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.add_book.prev_field(),
            KeyCode::Enter => {
                if let Some(request) = self.add_book.submit(&mut self.requests) {
                    self.spawn_book_request(Tab::AddBook, request);
                }
            }
            KeyCode::Backspace => self.add_book.backspace(),
            _ => {
                if let Some(c) = typed_char(&key) {
                    self.add_book.insert_char(c);
                }
            }
        }
    }

    fn handle_analytics_key(&mut self, key: KeyEvent) {
        if self.handle_browse_key(&key) {
            return;
        }
        if typed_char(&key) == Some('r') {
            let request = self.analytics.reload(&mut self.requests);
            self.spawn_book_request(Tab::Analytics, request);
        }
    }
}
