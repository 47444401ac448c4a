//! UI rendering for bookshelf
//!
//! Two screens, chosen from the session:
//! - Login: sign-in / sign-up card (or a spinner while the session restores)
//! - Dashboard: header, tab sidebar and the mounted panel
//!
//! ## Responsive Layout System
//!
//! Render functions size themselves through `LayoutContext`, which wraps the
//! terminal dimensions:
//!
//! - `percent_width()` / `bounded_width()` - Proportional dimensions
//! - `sidebar_width()` - Zero on tiny terminals, where tabs move inline
//! - `is_compact()` / `is_narrow()` / `is_short()` - Query terminal size state

pub mod components;
mod dashboard;
mod helpers;
mod layout;
mod login;
mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use login::APP_TITLE;

use ratatui::Frame;

use crate::app::{App, Screen};
use dashboard::render_dashboard;
use login::render_login_screen;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Login => render_login_screen(frame, app),
        Screen::Dashboard => render_dashboard(frame, app),
    }
}
