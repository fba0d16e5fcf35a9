//! TUI theme and styles
//!
//! Terminals reached over serial lines and old emulators often have no
//! colour, so every style is built from attributes only.

use ratatui::style::{Modifier, Style};

/// Application theme
pub struct Theme;

impl Theme {
    /// Header title style
    pub fn header() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Footer/status bar style
    pub fn status_bar() -> Style {
        Style::default()
    }

    /// Selected menu entry style
    pub fn selected() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Panel border style
    pub fn border() -> Style {
        Style::default()
    }

    /// Panel title style
    pub fn title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// "Terminal too small" notice style
    pub fn notice() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
