//! Tab Selector Component
//!
//! A horizontal selector with a `▶` marker on the selected item. Used for the
//! sign-in/sign-up toggle and for the dashboard tabs when the sidebar is hidden.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single item in the selector
#[derive(Debug, Clone, Copy)]
pub struct TabItem<'a> {
    /// Full label
    pub label: &'a str,
    /// Label used on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }
}

/// Render a horizontal tab selector as a single line.
///
/// ```ignore
/// let items = [TabItem::new("Sign in"), TabItem::new("Sign up")];
/// let line = render_tab_selector(&items, 0, &ctx);
/// ```
pub fn render_tab_selector(items: &[TabItem], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let spacing = if ctx.is_extra_small() { "  " } else { "    " };
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(spacing));
        }

        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        } else {
            let dim = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(label.to_string(), dim));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
