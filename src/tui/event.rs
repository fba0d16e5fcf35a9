//! Event handling for TUI

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// No input arrived before the poll timeout
    Tick,
}

/// Blocking source of input events
pub trait EventSource {
    /// Wait up to `timeout` for the next event
    fn next(&mut self, timeout: Duration) -> io::Result<AppEvent>;
}

/// Events read from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next(&mut self, timeout: Duration) -> io::Result<AppEvent> {
        if !event::poll(timeout)? {
            return Ok(AppEvent::Tick);
        }
        let app_event = match event::read()? {
            // Release/repeat events only show up with enhanced keyboard
            // reporting; treat the press as the keystroke
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            CrosstermEvent::Resize(w, h) => AppEvent::Resize(w, h),
            _ => AppEvent::Tick,
        };
        Ok(app_event)
    }
}

/// Helper to check for disconnect key combinations
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c') | KeyCode::Char('d'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Helper to check for back/escape key
pub fn is_back_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc | KeyCode::Left,
            ..
        }
    )
}

/// Helper to check for the help key
pub fn is_help_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::F(1),
            ..
        } | KeyEvent {
            code: KeyCode::Char('?'),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        }
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(is_quit_key(&press(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_back_keys() {
        assert!(is_back_key(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_back_key(&press(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!is_back_key(&press(KeyCode::Backspace, KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_keys() {
        assert!(is_help_key(&press(KeyCode::F(1), KeyModifiers::NONE)));
        assert!(is_help_key(&press(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        assert!(!is_help_key(&press(KeyCode::F(2), KeyModifiers::NONE)));
    }
}
