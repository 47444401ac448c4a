//! Responsive Layout System
//!
//! Provides a `LayoutContext` that encapsulates terminal dimensions
//! and provides fluid sizing calculations for responsive UI rendering.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let sidebar = ctx.sidebar_width();
/// if ctx.is_narrow() {
///     // drop optional table columns
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Panel Layout Calculations
    // ========================================================================

    /// Width of the dashboard tab sidebar. Zero hides it.
    pub fn sidebar_width(&self) -> u16 {
        if self.is_extra_small() {
            0
        } else if self.width < breakpoints::MD_WIDTH {
            22
        } else {
            self.bounded_width(20, 24, 32)
        }
    }

    /// Rows used by the dashboard header.
    pub fn header_height(&self) -> u16 {
        if self.is_compact() {
            1
        } else {
            3
        }
    }

    /// Width of the login card and form dialogs.
    pub fn form_width(&self) -> u16 {
        self.bounded_width(60, 36, 72).min(self.width)
    }

    /// Whether optional book columns (ISBN, published, copies) fit.
    pub fn show_detail_columns(&self) -> bool {
        self.width >= breakpoints::MD_WIDTH
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
