//! Title bar on the top row

use std::io;

use ratatui::layout::Size;

use crate::tui::layout;
use crate::tui::region::{Panel, Region};
use crate::tui::surface::Surface;
use crate::tui::text::text_width;
use crate::tui::theme::Theme;

/// Centred, bold title on row 0
#[derive(Debug)]
pub struct Header {
    region: Region,
    title: String,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            region: Region::new("header"),
            title: title.into(),
        }
    }
}

impl Panel for Header {
    fn region(&self) -> &Region {
        &self.region
    }

    fn layout(&mut self, size: Size) {
        self.region.place(layout::header(size), layout::fits(size));
    }

    fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        if !self.region.is_visible() {
            return Ok(());
        }
        self.region.erase(surface)?;
        let width = self.region.area().width;
        let x = width.saturating_sub(1 + text_width(&self.title) as u16) / 2;
        self.region
            .print(surface, x, 0, &self.title, Theme::header())
    }
}
