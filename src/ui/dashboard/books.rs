//! Books tab: list table, inline editor and delete confirmation.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::book_form::{self, FormStatus, FORM_HEIGHT};
use crate::models::Book;
use crate::state::{BooksPanel, BooksPhase, EditState};
use crate::ui::components::{
    error_line, render_dialog_frame, render_status_indicator, DialogFrameConfig,
    StatusIndicatorType,
};
use crate::ui::helpers::truncate_string;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SELECTED_BG};

const BROWSE_HINT: &str = "↑↓ select  e edit  d delete  r refresh  1-3 tabs  q quit";
const EDIT_HINT: &str = "Tab next field  Enter save  Esc cancel";

/// Text for the "last loaded" stamp in the panel title row.
pub fn loaded_stamp(panel: &BooksPanel) -> Option<String> {
    panel
        .last_loaded
        .map(|at| format!("Updated {}", at.format("%H:%M:%S")))
}

pub fn render(frame: &mut Frame, area: Rect, panel: &BooksPanel, tick: u64) {
    if area.height < 3 {
        return;
    }
    let ctx = LayoutContext::from_rect(area);

    let body = Rect {
        y: area.y,
        height: area.height - 1,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };

    let hint = match &panel.phase {
        BooksPhase::Editing(edit) => {
            render_editor(frame, body, panel, edit, tick);
            EDIT_HINT
        }
        BooksPhase::Loading => {
            let lines = render_status_indicator(&StatusIndicatorType::loading("Loading books...", tick));
            frame.render_widget(Paragraph::new(lines), body);
            BROWSE_HINT
        }
        BooksPhase::Error(message) => {
            let indicator = StatusIndicatorType::error(message.clone()).with_hint("Press r to retry");
            frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), body);
            BROWSE_HINT
        }
        BooksPhase::Loaded => {
            render_list(frame, body, &ctx, panel, tick);
            BROWSE_HINT
        }
    };

    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        footer,
    );

    if let Some(id) = panel.confirm_delete {
        render_delete_dialog(frame, area, &ctx, panel, id);
    }
}

fn book_row(book: &Book, detail: bool) -> Row<'static> {
    let mut cells = vec![Cell::from(book.title.clone()), Cell::from(book.author.clone())];
    if detail {
        cells.push(Cell::from(book.isbn.clone().unwrap_or_default()));
        cells.push(Cell::from(book.published_day().unwrap_or_default().to_string()));
        cells.push(Cell::from(
            book.available_copies
                .map(|c| c.to_string())
                .unwrap_or_default(),
        ));
    }
    Row::new(cells)
}

fn render_list(frame: &mut Frame, area: Rect, ctx: &LayoutContext, panel: &BooksPanel, tick: u64) {
    if panel.books.is_empty() {
        let lines = render_status_indicator(&StatusIndicatorType::info(
            "No books yet. Press 2 to add one.",
        ));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    // One row for the notice or the mutation spinner
    let status = if panel.is_mutating() {
        render_status_indicator(&StatusIndicatorType::loading("Deleting...", tick)).pop()
    } else {
        panel.notice.as_deref().map(error_line)
    };
    let table_height = if status.is_some() {
        area.height.saturating_sub(1)
    } else {
        area.height
    };

    let detail = ctx.show_detail_columns();
    let (header, widths) = if detail {
        (
            vec!["Title", "Author", "ISBN", "Published", "Copies"],
            vec![
                Constraint::Percentage(34),
                Constraint::Percentage(24),
                Constraint::Length(17),
                Constraint::Length(11),
                Constraint::Length(6),
            ],
        )
    } else {
        (
            vec!["Title", "Author"],
            vec![Constraint::Percentage(60), Constraint::Percentage(40)],
        )
    };

    let table = Table::new(panel.books.iter().map(|b| book_row(b, detail)), widths)
        .header(
            Row::new(header)
                .style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(COLOR_SELECTED_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(panel.selected));
    frame.render_stateful_widget(
        table,
        Rect {
            height: table_height,
            ..area
        },
        &mut state,
    );

    if let Some(line) = status {
        frame.render_widget(
            Paragraph::new(line),
            Rect {
                y: area.y + table_height,
                height: 1,
                ..area
            },
        );
    }
}

fn render_editor(frame: &mut Frame, area: Rect, panel: &BooksPanel, edit: &EditState, tick: u64) {
    let original = panel
        .books
        .iter()
        .find(|b| b.id == edit.id)
        .map(|b| b.title.as_str())
        .unwrap_or("");
    let heading = Line::from(vec![
        Span::styled(
            format!("Editing #{} ", edit.id),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_string(original, area.width.saturating_sub(14) as usize),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), Rect { height: 1, ..area });

    let status = if edit.saving {
        FormStatus::Pending("Saving...", tick)
    } else if let Some(error) = &edit.error {
        FormStatus::Error(error)
    } else {
        FormStatus::Idle
    };
    let form_area = Rect {
        y: area.y + 2,
        height: FORM_HEIGHT.min(area.height.saturating_sub(2)),
        ..area
    };
    book_form::render(frame, form_area, &edit.draft, edit.focus, status);
}

fn render_delete_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    panel: &BooksPanel,
    id: i64,
) {
    let title = panel
        .books
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.title.as_str())
        .unwrap_or("this book");

    let config = DialogFrameConfig::new("Delete book", 3).border_color(COLOR_ERROR);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let question = format!(
        "Delete \"{}\"?",
        truncate_string(title, inner.width.saturating_sub(12) as usize)
    );
    let lines = vec![
        Line::from(question),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
            Span::raw("Delete   "),
            Span::styled("[n] ", Style::default().fg(COLOR_DIM)),
            Span::raw("Cancel"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateBook;
    use ratatui::{backend::TestBackend, Terminal};

    fn panel_with(books: Vec<Book>) -> BooksPanel {
        let mut panel = BooksPanel::new();
        panel.books = books;
        panel.phase = BooksPhase::Loaded;
        panel
    }

    fn screen(panel: &BooksPanel, width: u16) -> String {
        let backend = TestBackend::new(width, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), panel, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..20)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dune() -> Book {
        Book {
            isbn: Some("978-0441013593".to_string()),
            ..Book::from_create(1, CreateBook::new("Dune", "Frank Herbert"))
        }
    }

    #[test]
    fn test_list_shows_titles() {
        let text = screen(&panel_with(vec![dune()]), 80);
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
        assert!(!text.contains("ISBN"));
    }

    #[test]
    fn test_wide_list_shows_detail_columns() {
        let text = screen(&panel_with(vec![dune()]), 130);
        assert!(text.contains("ISBN"));
        assert!(text.contains("978-0441013593"));
    }

    #[test]
    fn test_empty_list() {
        let text = screen(&panel_with(vec![]), 80);
        assert!(text.contains("No books yet"));
    }

    #[test]
    fn test_loading_and_error() {
        let mut panel = BooksPanel::new();
        panel.phase = BooksPhase::Loading;
        assert!(screen(&panel, 80).contains("Loading books..."));

        panel.phase = BooksPhase::Error("Failed to fetch books".to_string());
        let text = screen(&panel, 80);
        assert!(text.contains("Failed to fetch books"));
        assert!(text.contains("Press r to retry"));
    }

    #[test]
    fn test_delete_dialog() {
        let mut panel = panel_with(vec![dune()]);
        panel.confirm_delete = Some(1);
        let text = screen(&panel, 80);
        assert!(text.contains("Delete \"Dune\"?"));
        assert!(text.contains("[y] Delete"));
    }

    #[test]
    fn test_loaded_stamp() {
        let mut panel = BooksPanel::new();
        assert_eq!(loaded_stamp(&panel), None);
        panel.last_loaded = Some(chrono::Local::now());
        assert!(loaded_stamp(&panel).unwrap().starts_with("Updated "));
    }
}
