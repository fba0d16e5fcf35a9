//! Drawing surface shared by all panels
//!
//! Panels never talk to the terminal directly. They write text runs through
//! [`Surface`], which [`Screen`] implements on top of any ratatui
//! [`Backend`]: the crossterm backend when running, `TestBackend` in tests.

use std::io;

use ratatui::backend::Backend;
use ratatui::buffer::Cell;
use ratatui::layout::{Rect, Size};
use ratatui::style::Style;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::text::grapheme_width;

/// Cell-addressed output used by panels
pub trait Surface {
    /// Current terminal dimensions
    fn size(&self) -> io::Result<Size>;

    /// Write `text` at (x, y), clipped at the right edge of the screen
    fn print(&mut self, x: u16, y: u16, text: &str, style: Style) -> io::Result<()>;

    /// Blank out `area`
    fn clear_area(&mut self, area: Rect) -> io::Result<()>;

    /// Blank out the whole screen
    fn clear(&mut self) -> io::Result<()>;

    /// Push queued output to the terminal
    fn flush(&mut self) -> io::Result<()>;
}

/// A [`Surface`] backed by a ratatui backend
#[derive(Debug)]
pub struct Screen<B: Backend> {
    backend: B,
}

impl<B: Backend> Screen<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: Backend> Surface for Screen<B> {
    fn size(&self) -> io::Result<Size> {
        self.backend.size()
    }

    fn print(&mut self, x: u16, y: u16, text: &str, style: Style) -> io::Result<()> {
        let size = self.backend.size()?;
        if y >= size.height {
            return Ok(());
        }

        let mut cells = Vec::new();
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = grapheme_width(grapheme) as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > size.width {
                break;
            }
            let mut cell = Cell::default();
            cell.set_symbol(grapheme).set_style(style);
            cells.push((col, y, cell));
            col += width;
        }
        self.backend
            .draw(cells.iter().map(|(x, y, cell)| (*x, *y, cell)))
    }

    fn clear_area(&mut self, area: Rect) -> io::Result<()> {
        let size = self.backend.size()?;
        let area = area.intersection(Rect::new(0, 0, size.width, size.height));
        if area.is_empty() {
            return Ok(());
        }
        let blank = Cell::default();
        let cells: Vec<(u16, u16)> = area.positions().map(|p| (p.x, p.y)).collect();
        self.backend
            .draw(cells.into_iter().map(|(x, y)| (x, y, &blank)))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.backend.clear()
    }

    fn flush(&mut self) -> io::Result<()> {
        Backend::flush(&mut self.backend)
    }
}


#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    use super::testing::row_text;
    use super::*;

    #[test]
    fn test_print_clips_at_right_edge() {
        let mut screen = Screen::new(TestBackend::new(10, 2));
        screen.print(6, 0, "abcdef", Style::default()).unwrap();
        assert_eq!(row_text(&screen, 0), "      abcd");
    }

    #[test]
    fn test_print_emoji_sequence_occupies_two_columns() {
        let mut screen = Screen::new(TestBackend::new(6, 1));
        screen
            .print(0, 0, "\u{2764}\u{FE0F}ab", Style::default())
            .unwrap();
        let buffer = screen.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "\u{2764}\u{FE0F}");
        assert_eq!(buffer[(2, 0)].symbol(), "a");
        assert_eq!(buffer[(3, 0)].symbol(), "b");
    }

    #[test]
    fn test_print_below_screen_is_ignored() {
        let mut screen = Screen::new(TestBackend::new(10, 2));
        screen.print(0, 5, "abc", Style::default()).unwrap();
        assert_eq!(row_text(&screen, 1), "          ");
    }

    #[test]
    fn test_print_applies_style() {
        let mut screen = Screen::new(TestBackend::new(10, 1));
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        screen.print(0, 0, "ab", reversed).unwrap();
        let buffer = screen.backend().buffer();
        assert!(buffer[(0, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(2, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_clear_area() {
        let mut screen = Screen::new(TestBackend::new(6, 2));
        screen.print(0, 0, "xxxxxx", Style::default()).unwrap();
        screen.clear_area(Rect::new(2, 0, 2, 1)).unwrap();
        assert_eq!(row_text(&screen, 0), "xx  xx");
    }

    #[test]
    fn test_clear_area_outside_screen() {
        let mut screen = Screen::new(TestBackend::new(6, 2));
        screen.clear_area(Rect::new(10, 10, 5, 5)).unwrap();
        assert_eq!(screen.size().unwrap(), Size { width: 6, height: 2 });
    }
}
