//! Add Book tab.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::book_form::{self, FormStatus, FORM_HEIGHT};
use crate::state::AddBookPanel;
use crate::ui::theme::COLOR_DIM;

const HINT: &str = "Tab next field  Enter add book  Ctrl+X clear  F1 books";

pub fn render(frame: &mut Frame, area: Rect, panel: &AddBookPanel, tick: u64) {
    if area.height < 2 {
        return;
    }

    let status = if panel.is_submitting() {
        FormStatus::Pending("Adding...", tick)
    } else if let Some(error) = &panel.error {
        FormStatus::Error(error)
    } else {
        FormStatus::Idle
    };

    let form_area = Rect {
        height: FORM_HEIGHT.min(area.height - 1),
        ..area
    };
    book_form::render(frame, form_area, &panel.draft, panel.focus, status);

    frame.render_widget(
        Paragraph::new(Span::styled(HINT, Style::default().fg(COLOR_DIM))),
        Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestCounter;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(panel: &AddBookPanel) -> String {
        let backend = TestBackend::new(70, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), panel, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_validation_error_shown() {
        let mut panel = AddBookPanel::new();
        let mut ids = RequestCounter::new();
        assert!(panel.submit(&mut ids).is_none());
        assert!(screen(&panel).contains("Title is required"));
    }

    #[test]
    fn test_adding_state() {
        let mut panel = AddBookPanel::new();
        let mut ids = RequestCounter::new();
        panel.insert_str("Dune");
        panel.next_field();
        panel.insert_str("Frank Herbert");
        assert!(panel.submit(&mut ids).is_some());
        assert!(screen(&panel).contains("Adding..."));
    }
}
