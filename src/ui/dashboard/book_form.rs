//! Book form shared by the Add Book tab and the inline editor.

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::state::{BookForm, FormField};
use crate::ui::components::{
    error_line, render_inline_field, render_status_indicator, InputFieldConfig,
    StatusIndicatorType,
};

/// Column width for field labels, including the required marker.
const LABEL_WIDTH: u16 = 18;

/// Rows needed to render the form with its status line.
pub const FORM_HEIGHT: u16 = FormField::ALL.len() as u16 + 2;

/// What to show under the fields.
pub enum FormStatus<'a> {
    Idle,
    Pending(&'a str, u64),
    Error(&'a str),
}

pub fn render(frame: &mut Frame, area: Rect, draft: &BookForm, focus: FormField, status: FormStatus) {
    let mut y = area.y;
    let bottom = area.y + area.height;
    let pending = matches!(status, FormStatus::Pending(..));

    for field in FormField::ALL {
        if y >= bottom {
            return;
        }
        let config = InputFieldConfig::new(field.label(), draft.value(field))
            .focused(field == focus && !pending)
            .required(field.is_required())
            .placeholder(field.placeholder());
        y += render_inline_field(frame, Rect { y, height: 1, ..area }, &config, LABEL_WIDTH);
    }

    y += 1;
    if y >= bottom {
        return;
    }
    let line = match status {
        FormStatus::Idle => return,
        FormStatus::Pending(message, tick) => {
            match render_status_indicator(&StatusIndicatorType::loading(message, tick)).pop() {
                Some(line) => line,
                None => return,
            }
        }
        FormStatus::Error(message) => error_line(message),
    };
    frame.render_widget(Paragraph::new(line), Rect { y, height: 1, ..area });
}
