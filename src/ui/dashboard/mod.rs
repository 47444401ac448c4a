//! Dashboard UI module
//!
//! Renders the signed-in view: header, tab sidebar and the mounted panel.
//!
//! # Layout
//! ```text
//! +--------------------------------------------------+
//! | Library Management     alice (a@x)  Ctrl+L logout |
//! +------------+-------------------------------------+
//! | ▶ Books F1 | Books  Manage your book collection  |
//! |   Add   F2 |                                     |
//! |   Stats F3 | [panel body]                        |
//! |            | [panel key hints]                   |
//! +------------+-------------------------------------+
//! ```

pub mod add_book;
pub mod analytics;
pub mod book_form;
pub mod books;
pub mod header;
pub mod sidebar;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Tab};
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER};

/// Render the complete dashboard view
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ctx.header_height()), Constraint::Min(0)])
        .split(area);

    let user = app.session.user();
    header::render(frame, rows[0], user.as_ref());

    let sidebar_width = ctx.sidebar_width();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(rows[1]);

    let mut content = columns[1].inner(Margin::new(2, 1));
    if sidebar_width > 0 {
        sidebar::render(frame, columns[0], app.tab);
    } else {
        // No room for the sidebar: tabs go above the panel
        let items: Vec<TabItem> = Tab::ALL.iter().map(|t| TabItem::new(t.title())).collect();
        let line = render_tab_selector(&items, app.tab.index(), &ctx);
        frame.render_widget(Paragraph::new(line), Rect { height: 1, ..content });
        content.y += 2;
        content.height = content.height.saturating_sub(2);
    }

    if content.height < 3 {
        return;
    }
    render_title(frame, Rect { height: 1, ..content }, app, &ctx);

    let body = Rect {
        y: content.y + 2,
        height: content.height - 2,
        ..content
    };
    match app.tab {
        Tab::Books => books::render(frame, body, &app.books, app.tick_count),
        Tab::AddBook => add_book::render(frame, body, &app.add_book, app.tick_count),
        Tab::Analytics => analytics::render(frame, body, &app.analytics, app.tick_count),
    }
}

/// Panel title, subtitle and (books only) the last refresh time.
fn render_title(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let mut spans = vec![Span::styled(
        app.tab.title(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if !ctx.is_compact() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(app.tab.subtitle(), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if app.tab == Tab::Books {
        if let Some(stamp) = books::loaded_stamp(&app.books) {
            frame.render_widget(
                Paragraph::new(Span::styled(stamp, Style::default().fg(COLOR_DIM)))
                    .alignment(Alignment::Right),
                area,
            );
        }
    }
}
