//! Screen regions and the panel trait
//!
//! A [`Region`] is the rectangle a panel occupies plus whether the current
//! terminal is large enough for the panel to draw. Panels recompute their
//! region in [`Panel::layout`] and refuse to draw while it is not visible.

use std::io;

use crossterm::event::KeyCode;
use ratatui::layout::{Rect, Size};
use ratatui::style::Style;
use ratatui::symbols::border;
use crate::tui::surface::Surface;
use crate::tui::text::truncate;

/// A named rectangular area of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    area: Rect,
    visible: bool,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area: Rect::default(),
            visible: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Whether the panel may draw into this region
    pub fn is_visible(&self) -> bool {
        self.visible && !self.area.is_empty()
    }

    /// Move/resize the region
    pub fn place(&mut self, area: Rect, visible: bool) {
        if area != self.area {
            tracing::trace!("{} region placed at {:?}", self.name, area);
        }
        self.area = area;
        self.visible = visible;
    }

    /// Blank the whole region
    pub fn erase(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.clear_area(self.area)
    }

    /// Print `text` at (dx, dy) relative to the region, clipped to its width
    pub fn print(
        &self,
        surface: &mut dyn Surface,
        dx: u16,
        dy: u16,
        text: &str,
        style: Style,
    ) -> io::Result<()> {
        if dy >= self.area.height || dx >= self.area.width {
            return Ok(());
        }
        let room = usize::from(self.area.width - dx);
        surface.print(
            self.area.x + dx,
            self.area.y + dy,
            truncate(text, room),
            style,
        )
    }

    /// Draw a single-line border with ` title ` set into the top edge
    pub fn draw_border(
        &self,
        surface: &mut dyn Surface,
        title: &str,
        border_style: Style,
        title_style: Style,
    ) -> io::Result<()> {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.area;
        if width < 2 || height < 2 {
            return Ok(());
        }
        let set = border::PLAIN;
        let inner = usize::from(width - 2);

        let top = format!(
            "{}{}{}",
            set.top_left,
            set.horizontal_top.repeat(inner),
            set.top_right
        );
        let bottom = format!(
            "{}{}{}",
            set.bottom_left,
            set.horizontal_bottom.repeat(inner),
            set.bottom_right
        );
        surface.print(x, y, &top, border_style)?;
        for row in 1..height - 1 {
            surface.print(x, y + row, set.vertical_left, border_style)?;
            surface.print(x + width - 1, y + row, set.vertical_right, border_style)?;
        }
        surface.print(x, y + height - 1, &bottom, border_style)?;

        if !title.is_empty() && width > 4 {
            let title = format!(" {} ", title);
            let room = usize::from(width - 4);
            surface.print(x + 2, y, truncate(&title, room), title_style)?;
        }
        Ok(())
    }
}

/// A drawable, independently laid out part of the interface
pub trait Panel {
    /// The region this panel occupies
    fn region(&self) -> &Region;

    /// Recompute the region for a terminal of `size`
    fn layout(&mut self, size: Size);

    /// Draw the panel; does nothing while the region is not visible
    fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()>;

    /// React to a key; returns whether the key was consumed
    fn handle_key(&mut self, _key: KeyCode, _surface: &mut dyn Surface) -> io::Result<bool> {
        Ok(false)
    }

    /// Blank the panel's region
    fn erase(&self, surface: &mut dyn Surface) -> io::Result<()> {
        self.region().erase(surface)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::surface::testing::screen_text;
    use crate::tui::surface::Screen;

    #[test]
    fn test_border_with_title() {
        let mut screen = Screen::new(TestBackend::new(12, 4));
        let mut region = Region::new("menu");
        region.place(Rect::new(0, 0, 12, 4), true);
        region
            .draw_border(&mut screen, "Menu", Style::default(), Style::default())
            .unwrap();
        assert_eq!(
            screen_text(&screen),
            vec![
                "┌─ Menu ───┐",
                "│          │",
                "│          │",
                "└──────────┘",
            ]
        );
    }

    #[test]
    fn test_print_clipped_to_region() {
        let mut screen = Screen::new(TestBackend::new(10, 1));
        let mut region = Region::new("r");
        region.place(Rect::new(2, 0, 4, 1), true);
        region
            .print(&mut screen, 1, 0, "abcdef", Style::default())
            .unwrap();
        assert_eq!(screen_text(&screen), vec!["   abc    "]);
    }

    #[test]
    fn test_empty_region_not_visible() {
        let mut region = Region::new("r");
        region.place(Rect::default(), true);
        assert!(!region.is_visible());
    }
}
