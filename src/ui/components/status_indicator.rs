//! Status Indicator Component
//!
//! Renders loading, success, error and empty-state lines shared by the login
//! card and the dashboard panels.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::helpers::spinner;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Spinner with a message, animated by the app tick
    Loading { message: String, tick: u64 },
    /// Completed action
    Success { message: String },
    /// Failure with an optional hint line
    Error {
        message: String,
        hint: Option<String>,
    },
    /// Dimmed informational text (empty lists)
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn loading(message: impl Into<String>, tick: u64) -> Self {
        Self::Loading {
            message: message.into(),
            tick,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            Self::Error { message, .. } => Self::Error {
                message,
                hint: Some(hint.into()),
            },
            other => other,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Render a status indicator as lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Loading { message, tick } => vec![Line::from(vec![
            Span::styled(format!("{} ", spinner(*tick)), Style::default().fg(COLOR_PENDING)),
            Span::styled(
                message.clone(),
                Style::default().fg(COLOR_PENDING).add_modifier(Modifier::BOLD),
            ),
        ])],

        StatusIndicatorType::Success { message } => vec![Line::from(vec![
            Span::styled("\u{2713} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(message.clone(), Style::default().fg(COLOR_SUCCESS)),
        ])],

        StatusIndicatorType::Error { message, hint } => {
            let mut lines = vec![Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(
                    message.clone(),
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                ),
            ])];
            if let Some(hint) = hint {
                lines.push(Line::from(Span::styled(
                    format!("  {}", hint),
                    Style::default().fg(COLOR_DIM),
                )));
            }
            lines
        }

        StatusIndicatorType::Info { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_DIM),
        ))],
    }
}

// ============================================================================
// Tests
// ============================================================================
