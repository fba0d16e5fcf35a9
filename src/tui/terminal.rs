//! Ownership of the controlling terminal
//!
//! The interface holds the terminal in raw mode on the alternate screen.
//! Running a menu command hands it back temporarily through
//! [`TerminalMode::release`] and takes it again with
//! [`TerminalMode::acquire`].

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use crate::error::{Result, TimedialError};

/// Switches the terminal between full-screen and line mode
#[cfg_attr(test, mockall::automock)]
pub trait TerminalMode {
    /// Enter raw mode on the alternate screen
    fn acquire(&mut self) -> Result<()>;

    /// Return to the normal screen in cooked mode
    fn release(&mut self) -> Result<()>;
}

/// The process's real terminal
#[derive(Debug, Default)]
pub struct RawTerminal {
    active: bool,
}

impl RawTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalMode for RawTerminal {
    fn acquire(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|e| TimedialError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| TimedialError::Terminal(e.to_string()))?;
        // Some serial terminals have no invisible cursor
        if let Err(e) = execute!(stdout, Hide) {
            tracing::debug!("Cursor hide not supported: {}", e);
        }
        self.active = true;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode().map_err(|e| TimedialError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show);
        execute!(stdout, LeaveAlternateScreen)
            .map_err(|e| TimedialError::Terminal(e.to_string()))?;
        stdout.flush()?;
        Ok(())
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Restore the terminal without touching any state
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut terminal = RawTerminal::new();
        terminal.release().unwrap();
        terminal.release().unwrap();
    }
}
