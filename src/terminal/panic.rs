//! Panic hook that gives the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call once, before creating the `TerminalManager`.
///
/// The panic is also logged, since stderr may be lost with the alternate
/// screen.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}
