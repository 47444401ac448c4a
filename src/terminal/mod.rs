//! Terminal lifecycle for the TUI.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate screen
//! and puts it back when dropped. The panic hook from [`setup_panic_hook`]
//! covers the paths where `Drop` never runs.
//!
//! ```no_run
//! use bookshelf::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Terminal type used by the binary.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal and restores the shell on drop.
pub struct TerminalManager {
    terminal: Tui,
    restored: bool,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with bracketed paste, and
    /// clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("terminal entered tui mode");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls (and the drop) are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        tracing::debug!("terminal restored");
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
