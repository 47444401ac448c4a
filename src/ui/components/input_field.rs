//! Input Field Component
//!
//! A labelled text input with focus handling, password masking and a
//! placeholder. Boxed fields carry rounded borders (login card); inline
//! fields fit on one row (book forms).

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::helpers::truncate_string;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Block cursor appended to the focused field
const CURSOR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above (boxed) or before (inline) the value
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
    /// Whether the label gets a required marker
    pub required: bool,
    /// Placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            required: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Label text including the required marker.
    fn label_text(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// The value as displayed, tail-truncated to `width` columns so the
    /// cursor stays visible while typing.
    fn value_spans(&self, width: usize) -> Vec<Span<'static>> {
        let shown = match (self.value.is_empty(), self.placeholder) {
            (true, Some(placeholder)) if !self.focused => {
                return vec![Span::styled(
                    truncate_string(placeholder, width),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
                )];
            }
            _ if self.is_password => "\u{2022}".repeat(self.value.chars().count()),
            _ => self.value.to_string(),
        };

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        let room = if self.focused {
            width.saturating_sub(1)
        } else {
            width
        };
        let mut spans = vec![Span::styled(tail(&shown, room), text_style)];
        if self.focused {
            spans.push(Span::styled(CURSOR.to_string(), text_style));
        }
        spans
    }
}

/// The last `width` display columns of `s`.
fn tail(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out: Vec<char> = Vec::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.into_iter().rev().collect()
}

/// Rows taken by a boxed field: label + bordered box.
pub const BOXED_FIELD_HEIGHT: u16 = 4;

/// Render a boxed input field (label row + rounded box). Returns the rows used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.height < BOXED_FIELD_HEIGHT {
        return render_inline_field(frame, area, config, 12);
    }

    let label_style = if config.focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label_text(), label_style))),
        label_area,
    );

    let box_area = Rect {
        y: area.y + 1,
        height: 3,
        ..area
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let inner_width = box_area.width.saturating_sub(2) as usize;
    frame.render_widget(
        Paragraph::new(Line::from(config.value_spans(inner_width))).block(block),
        box_area,
    );

    BOXED_FIELD_HEIGHT
}

/// Render a single-row field as `label  value`. Returns the rows used.
pub fn render_inline_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    label_width: u16,
) -> u16 {
    if area.height == 0 {
        return 0;
    }

    let marker = if config.focused { "› " } else { "  " };
    let label_style = if config.focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label = format!("{:<width$}", config.label_text(), width = label_width as usize);

    let used = 2 + label.width();
    let value_width = (area.width as usize).saturating_sub(used);

    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(label, label_style),
    ];
    spans.extend(config.value_spans(value_width));

    let row_style = if config.focused {
        Style::default().bg(COLOR_INPUT_BG)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(row_style),
        Rect { height: 1, ..area },
    );
    1
}

/// One-row inline error beneath a form.
pub fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
        Span::styled(message.to_string(), Style::default().fg(COLOR_ERROR)),
    ])
}

// ============================================================================
// Tests
// ============================================================================
