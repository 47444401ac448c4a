//! Dashboard header
//!
//! Renders the app title (left) and the signed-in user with the logout hint
//! (right). Compact terminals get a single row; otherwise the header is
//! boxed.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::User;
use crate::ui::helpers::truncate_string;
use crate::ui::login::APP_TITLE;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const LOGOUT_HINT: &str = "Ctrl+L logout";

/// Right-hand section: `username (email)  Ctrl+L logout`, shortened to fit.
fn user_line(user: Option<&User>, max_width: usize) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(user) = user {
        let full = format!("{} ({})", user.username, user.email);
        let room = max_width.saturating_sub(LOGOUT_HINT.len() + 3);
        let who = if full.width() <= room {
            full
        } else {
            truncate_string(&user.username, room)
        };
        spans.push(Span::styled(who, Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(LOGOUT_HINT, Style::default().fg(COLOR_DIM)));
    Line::from(spans)
}

/// Render the dashboard header into `area`.
pub fn render(frame: &mut Frame, area: Rect, user: Option<&User>) {
    if area.height == 0 || area.width < 10 {
        return;
    }

    let inner = if area.height >= 3 {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(COLOR_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: 1,
        }
    } else {
        Rect { height: 1, ..area }
    };

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, inner);

    let right_width = (inner.width as usize).saturating_sub(APP_TITLE.len() + 2);
    let right = Paragraph::new(user_line(user, right_width)).alignment(Alignment::Right);
    frame.render_widget(right, inner);
}
