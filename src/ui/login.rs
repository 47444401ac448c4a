//! Login / registration screen.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{
    error_line, render_input_field, render_status_indicator, render_tab_selector,
    InputFieldConfig, StatusIndicatorType, TabItem, BOXED_FIELD_HEIGHT,
};
use super::helpers::centered_rect;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::state::{LoginField, LoginForm, LoginMode};

/// Application title shown above the card
pub const APP_TITLE: &str = "Library Management";

fn field_label(field: LoginField) -> &'static str {
    match field {
        LoginField::Username => "Username",
        LoginField::Email => "Email",
        LoginField::Password => "Password",
    }
}

fn field_value(form: &LoginForm, field: LoginField) -> &str {
    match field {
        LoginField::Username => &form.username,
        LoginField::Email => &form.email,
        LoginField::Password => &form.password,
    }
}

/// Rows needed inside the card for the current mode.
fn card_content_height(form: &LoginForm) -> u16 {
    // title + selector + gap, fields, error/status + gap + hint
    3 + form.fields().len() as u16 * BOXED_FIELD_HEIGHT + 4
}

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);
    let inner = area.inner(Margin::new(2, 1));

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect { height: 1, ..inner });

    let body = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };

    if app.is_restoring() {
        let lines = render_status_indicator(&StatusIndicatorType::loading(
            "Restoring session...",
            app.tick_count,
        ));
        let status = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(status, centered_rect(body.width, 1, body));
        return;
    }

    render_card(frame, body, &ctx, &app.login, app.tick_count);
}

fn render_card(frame: &mut Frame, area: Rect, ctx: &LayoutContext, form: &LoginForm, tick: u64) {
    let card = centered_rect(ctx.form_width(), card_content_height(form) + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let content = block.inner(card).inner(Margin::new(1, 0));
    frame.render_widget(block, card);

    let mut y = content.y;
    let bottom = content.y + content.height;
    let row = |y: u16| Rect {
        y,
        height: 1,
        ..content
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            form.mode.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        row(y),
    );
    y += 1;

    let modes = [
        TabItem::with_short_label("Sign In", "In"),
        TabItem::with_short_label("Sign Up", "Up"),
    ];
    let selected = match form.mode {
        LoginMode::SignIn => 0,
        LoginMode::SignUp => 1,
    };
    frame.render_widget(Paragraph::new(render_tab_selector(&modes, selected, ctx)), row(y));
    y += 2;

    for &field in form.fields() {
        if y + BOXED_FIELD_HEIGHT > bottom {
            break;
        }
        let config = InputFieldConfig::new(field_label(field), field_value(form, field))
            .focused(form.focus == field && !form.is_submitting())
            .password(field == LoginField::Password);
        y += render_input_field(
            frame,
            Rect {
                y,
                height: BOXED_FIELD_HEIGHT,
                ..content
            },
            &config,
        );
    }

    if y >= bottom {
        return;
    }
    let status = if form.is_submitting() {
        let message = match form.mode {
            LoginMode::SignIn => "Signing in...",
            LoginMode::SignUp => "Creating account...",
        };
        render_status_indicator(&StatusIndicatorType::loading(message, tick))
            .into_iter()
            .next()
    } else if let Some(error) = &form.error {
        Some(error_line(error))
    } else {
        Some(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                form.mode.submit_label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
    };
    if let Some(line) = status {
        frame.render_widget(Paragraph::new(line), row(y));
    }
    y += 2;

    if y < bottom {
        frame.render_widget(
            Paragraph::new(Span::styled(form.mode.toggle_hint(), Style::default().fg(COLOR_DIM))),
            row(y),
        );
    }
}
