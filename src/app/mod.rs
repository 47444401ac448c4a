//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Tab`] - Which dashboard panel is mounted
//! - [`AppMessage`] - Messages for async communication

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, Tab};

use tokio::sync::mpsc;

use crate::api::BooksApi;
use crate::session::{SessionStatus, SessionStore};
use crate::state::{
    AddBookPanel, AnalyticsPanel, AnalyticsPhase, BooksPanel, LoginForm, RequestCounter,
};

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Mounted dashboard tab
    pub tab: Tab,
    /// Login / registration form
    pub login: LoginForm,
    /// Books tab state
    pub books: BooksPanel,
    /// Add Book tab state
    pub add_book: AddBookPanel,
    /// Analytics tab state
    pub analytics: AnalyticsPanel,
    /// Session handle (shared with spawned auth tasks)
    pub session: SessionStore,
    /// Book catalog client (cloned into spawned tasks)
    books_api: BooksApi,
    /// Source of request ids for every panel
    requests: RequestCounter,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create a new App instance.
    ///
    /// Call [`App::start`] once the session has been restored.
    pub fn new(session: SessionStore, books_api: BooksApi) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            tab: Tab::default(),
            login: LoginForm::new(),
            books: BooksPanel::new(),
            add_book: AddBookPanel::new(),
            analytics: AnalyticsPanel::new(),
            session,
            books_api,
            requests: RequestCounter::new(),
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
        }
    }

    /// Which screen to show, derived from the session.
    pub fn screen(&self) -> Screen {
        if self.session.is_authenticated() {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }

    /// True while the stored session is still being read.
    pub fn is_restoring(&self) -> bool {
        matches!(
            self.session.status(),
            SessionStatus::Uninitialized | SessionStatus::Restoring
        )
    }

    /// Enter the dashboard if the restored session is authenticated.
    pub fn start(&mut self) {
        if self.session.is_authenticated() {
            self.enter_dashboard();
        }
        self.mark_dirty();
    }

    /// Show the dashboard on its default tab with a fresh books panel.
    pub(crate) fn enter_dashboard(&mut self) {
        self.tab = Tab::Books;
        self.add_book = AddBookPanel::new();
        self.analytics = AnalyticsPanel::new();
        let request = self.books.mount(&mut self.requests);
        self.spawn_book_request(Tab::Books, request);
    }

    /// Mount `tab`. Selecting the current tab does nothing.
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        tracing::debug!(from = self.tab.title(), to = tab.title(), "switching tab");
        self.tab = tab;
        match tab {
            Tab::Books => {
                let request = self.books.mount(&mut self.requests);
                self.spawn_book_request(Tab::Books, request);
            }
            Tab::AddBook => self.add_book.mount(),
            Tab::Analytics => {
                let request = self.analytics.mount(&mut self.requests);
                self.spawn_book_request(Tab::Analytics, request);
            }
        }
        self.mark_dirty();
    }

    /// Drop all dashboard state so late results are ignored.
    pub(crate) fn reset_dashboard(&mut self) {
        self.tab = Tab::Books;
        self.books = BooksPanel::new();
        self.add_book = AddBookPanel::new();
        self.analytics = AnalyticsPanel::new();
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.has_pending_work() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// Whether a spinner is visible somewhere.
    fn has_pending_work(&self) -> bool {
        match self.screen() {
            Screen::Login => self.login.is_submitting() || self.is_restoring(),
            Screen::Dashboard => match self.tab {
                Tab::Books => self.books.is_loading() || self.books.is_mutating(),
                Tab::AddBook => self.add_book.is_submitting(),
                Tab::Analytics => self.analytics.phase == AnalyticsPhase::Loading,
            },
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
