//! Analytics tab: three stat cards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::BookStats;
use crate::state::{AnalyticsPanel, AnalyticsPhase};
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_STAT};

const HINT: &str = "r reload  1-3 tabs  q quit";

/// Card titles and values, in display order.
pub fn stat_cards(stats: &BookStats) -> [(&'static str, usize); 3] {
    [
        ("TOTAL BOOKS", stats.total_books),
        ("UNIQUE AUTHORS", stats.unique_authors),
        ("WITH DESCRIPTION", stats.with_description),
    ]
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(COLOR_STAT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render(frame: &mut Frame, area: Rect, panel: &AnalyticsPanel, tick: u64) {
    if area.height < 2 {
        return;
    }
    let body = Rect {
        height: area.height - 1,
        ..area
    };

    match &panel.phase {
        AnalyticsPhase::Loading => {
            let lines = render_status_indicator(&StatusIndicatorType::loading("Loading stats...", tick));
            frame.render_widget(Paragraph::new(lines), body);
        }
        AnalyticsPhase::Error(message) => {
            let indicator = StatusIndicatorType::error(message.clone()).with_hint("Press r to retry");
            frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), body);
        }
        AnalyticsPhase::Loaded(stats) => {
            // Cards side by side when they fit, stacked otherwise
            let cards = stat_cards(stats);
            let (direction, constraint) = if body.width >= 60 {
                (Direction::Horizontal, Constraint::Ratio(1, 3))
            } else {
                (Direction::Vertical, Constraint::Length(4))
            };
            let card_height = 4.min(body.height);
            let row = if direction == Direction::Horizontal {
                Rect {
                    height: card_height,
                    ..body
                }
            } else {
                body
            };
            let chunks = Layout::default()
                .direction(direction)
                .constraints([constraint; 3])
                .split(row);
            for ((title, value), chunk) in cards.iter().zip(chunks.iter()) {
                render_card(frame, *chunk, title, *value);
            }
        }
    }

    frame.render_widget(
        Paragraph::new(Span::styled(HINT, Style::default().fg(COLOR_DIM))),
        Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        },
    );
}
