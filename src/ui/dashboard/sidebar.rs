//! Dashboard sidebar: one row per tab with its function key.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Tab;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG};

fn tab_line(tab: Tab, active: bool, width: u16) -> Line<'static> {
    let marker = if active { "▶ " } else { "  " };
    let label_style = if active {
        Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label = format!("{}{}", marker, tab.title());
    let hint = tab.key_hint();
    let pad = (width as usize).saturating_sub(label.chars().count() + hint.len() + 1);

    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(" ".repeat(pad), label_style),
        Span::styled(format!("{} ", hint), label_style.fg(COLOR_DIM)),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, active: Tab) {
    if area.width == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for tab in Tab::ALL {
        lines.push(tab_line(tab, tab == active, inner.width));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
