//! Status bar on the bottom row
//!
//! Shows the terminal type and size on the left and the status text plus
//! the help hint on the right. The status text is pushed in by the
//! controller on a timer; the footer never updates itself.

use std::io;

use ratatui::layout::Size;

use crate::tui::layout;
use crate::tui::region::{Panel, Region};
use crate::tui::surface::Surface;
use crate::tui::text::{text_width, truncate};
use crate::tui::theme::Theme;

const HELP_HINT: &str = "F1 for help";

#[derive(Debug)]
pub struct Footer {
    region: Region,
    term: String,
    status: String,
    size: Size,
}

impl Footer {
    /// `term` is the terminal type reported by the environment
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            region: Region::new("footer"),
            term: term.into(),
            status: String::new(),
            size: Size::default(),
        }
    }

    /// Replace the status text; returns whether it changed
    pub fn set_status(&mut self, status: impl Into<String>) -> bool {
        let status = status.into();
        if status == self.status {
            return false;
        }
        self.status = status;
        true
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn left_text(&self) -> String {
        format!(
            "Terminal: {} ({}x{})",
            self.term, self.size.width, self.size.height
        )
    }

    fn right_text(&self, room: usize) -> String {
        let full = if self.status.is_empty() {
            HELP_HINT.to_string()
        } else {
            format!("{}  {}", self.status, HELP_HINT)
        };
        if text_width(&full) <= room {
            full
        } else {
            HELP_HINT.to_string()
        }
    }
}

impl Panel for Footer {
    fn region(&self) -> &Region {
        &self.region
    }

    fn layout(&mut self, size: Size) {
        self.size = size;
        self.region.place(layout::footer(size), layout::fits(size));
    }

    fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        if !self.region.is_visible() {
            return Ok(());
        }
        self.region.erase(surface)?;

        let width = usize::from(self.region.area().width);
        let left = self.left_text();
        let room = width.saturating_sub(text_width(&left) + 4);
        let right = self.right_text(room);
        let x = width.saturating_sub(text_width(&right) + 1);

        // the hint wins when both do not fit; keep one blank column between
        let left = truncate(&left, x.saturating_sub(2));
        self.region
            .print(surface, 1, 0, left, Theme::status_bar())?;
        self.region
            .print(surface, x as u16, 0, &right, Theme::status_bar())
    }
}
