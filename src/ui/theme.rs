//! Color theme constants for the bookshelf UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for dialog boxes (delete confirmation)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Selected row background in the books table
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 41, 59);

// ============================================================================
// Status Colors
// ============================================================================

/// Success - green #059669
pub const COLOR_SUCCESS: Color = Color::Rgb(5, 150, 105);

/// Errors and destructive actions - red #DC2626
pub const COLOR_ERROR: Color = Color::Rgb(220, 38, 38);

/// In-flight work - yellow
pub const COLOR_PENDING: Color = Color::Yellow;

/// Stat card numbers - blue #007ACC
pub const COLOR_STAT: Color = Color::Rgb(0, 122, 204);
