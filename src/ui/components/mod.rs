//! Reusable UI Components
//!
//! Components shared by the login screen and the dashboard panels.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal selector with an arrow marker
//! - `InputField` - Boxed or inline text input with focus and password masking
//! - `StatusIndicator` - Loading, success, error and info lines
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{
    error_line, render_inline_field, render_input_field, InputFieldConfig, BOXED_FIELD_HEIGHT,
};
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
