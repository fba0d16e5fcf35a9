//! Centred text box used for the welcome/help overlay and notices
//!
//! Redraws are diffed: `render` rewrites only lines that differ from what
//! was drawn last time. The box is erased and fully redrawn only after
//! `layout`, i.e. on construction and resize.

use std::io;

use ratatui::layout::Size;

use crate::tui::layout::{self, Content};
use crate::tui::region::{Panel, Region};
use crate::tui::surface::Surface;
use crate::tui::text::fit;
use crate::tui::theme::Theme;

#[derive(Debug)]
pub struct TextBox {
    region: Region,
    title: String,
    lines: Vec<String>,
    rendered: Vec<String>,
    bordered: bool,
    stale: bool,
}

impl TextBox {
    pub fn new<S: Into<String>>(title: impl Into<String>, lines: impl IntoIterator<Item = S>) -> Self {
        let title = title.into();
        Self {
            region: Region::new(title.clone()),
            title,
            lines: lines.into_iter().map(Into::into).collect(),
            rendered: Vec::new(),
            bordered: false,
            stale: true,
        }
    }

    /// Draw a border with the title in it
    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the content; the next `render` only touches changed lines
    pub fn set_lines<S: Into<String>>(&mut self, lines: impl IntoIterator<Item = S>) {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    fn margin(&self) -> u16 {
        if self.bordered {
            2
        } else {
            1
        }
    }

    /// Write row `index`, padded so leftovers of the previous text vanish
    fn write_row(&self, surface: &mut dyn Surface, index: usize, text: &str) -> io::Result<()> {
        let margin = self.margin();
        let room = usize::from(self.region.area().width.saturating_sub(2 * margin));
        let padded = fit(text, room);
        self.region
            .print(surface, margin, index as u16 + 1, &padded, Theme::normal())
    }
}

impl Panel for TextBox {
    fn region(&self) -> &Region {
        &self.region
    }

    fn layout(&mut self, size: Size) {
        let content = Content::measure(&self.lines, &self.title);
        let area = layout::text_box(size, content, 2 * self.margin());
        self.region.place(area, layout::fits(size));
        self.stale = true;
    }

    fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        if !self.region.is_visible() {
            return Ok(());
        }
        if self.stale {
            self.region.erase(surface)?;
            if self.bordered {
                self.region
                    .draw_border(surface, &self.title, Theme::border(), Theme::title())?;
            }
            self.rendered.clear();
            self.stale = false;
        }

        let rows = usize::from(self.region.area().height.saturating_sub(2));
        for (index, line) in self.lines.iter().enumerate().take(rows) {
            if self.rendered.get(index) != Some(line) {
                self.write_row(surface, index, line)?;
            }
        }
        for index in self.lines.len()..self.rendered.len().min(rows) {
            self.write_row(surface, index, "")?;
        }

        self.rendered = self.lines.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::surface::testing::{screen_text, RecordingSurface};
    use crate::tui::surface::Screen;

    #[test]
    fn test_only_changed_lines_rewritten() {
        let mut surface = RecordingSurface::new(80, 24);
        let mut text_box = TextBox::new("Status", ["a", "b"]);
        text_box.layout(surface.size().unwrap());
        text_box.render(&mut surface).unwrap();
        let top = text_box.region().area().y;

        surface.reset();
        text_box.set_lines(["a", "c"]);
        text_box.render(&mut surface).unwrap();

        assert!(surface.clears.is_empty());
        assert_eq!(surface.touched_rows(), vec![top + 2]);
        assert_eq!(surface.prints.len(), 1);
        assert!(surface.prints[0].2.starts_with('c'));
    }

    #[test]
    fn test_unchanged_render_writes_nothing() {
        let mut surface = RecordingSurface::new(80, 24);
        let mut text_box = TextBox::new("Status", ["a", "b"]);
        text_box.layout(surface.size().unwrap());
        text_box.render(&mut surface).unwrap();
        surface.reset();
        text_box.render(&mut surface).unwrap();
        assert!(surface.touched_rows().is_empty());
    }

    #[test]
    fn test_layout_forces_full_redraw() {
        let mut surface = RecordingSurface::new(80, 24);
        let mut text_box = TextBox::new("Status", ["a", "b"]);
        text_box.layout(surface.size().unwrap());
        text_box.render(&mut surface).unwrap();
        surface.reset();

        text_box.layout(surface.size().unwrap());
        text_box.render(&mut surface).unwrap();
        assert_eq!(surface.clears, vec![text_box.region().area()]);
        assert_eq!(surface.prints.len(), 2);
    }

    #[test]
    fn test_removed_lines_are_blanked() {
        let mut screen = Screen::new(TestBackend::new(40, 24));
        let mut text_box = TextBox::new("Status", ["first", "second"]);
        text_box.layout(screen.size().unwrap());
        text_box.render(&mut screen).unwrap();
        text_box.set_lines(["first"]);
        text_box.render(&mut screen).unwrap();
        let text = screen_text(&screen).join("\n");
        assert!(text.contains("first"));
        assert!(!text.contains("second"));
    }

    #[test]
    fn test_bordered_box_shows_title() {
        let mut screen = Screen::new(TestBackend::new(40, 24));
        let mut text_box = TextBox::new("Error", ["Menu unavailable"]).bordered();
        text_box.layout(screen.size().unwrap());
        text_box.render(&mut screen).unwrap();
        let text = screen_text(&screen).join("\n");
        assert!(text.contains(" Error "));
        assert!(text.contains("Menu unavailable"));
    }

    #[test]
    fn test_emoji_line_wider_than_box_is_cut() {
        let mut screen = Screen::new(TestBackend::new(40, 24));
        let hearts = "\u{2764}\u{FE0F}".repeat(30);
        let mut text_box = TextBox::new("Hearts", [hearts]).bordered();
        text_box.layout(screen.size().unwrap());
        text_box.render(&mut screen).unwrap();
        let area = text_box.region().area();
        assert!(area.right() <= 40);
        let row = crate::tui::surface::testing::row_text(&screen, area.y + 1);
        assert!(row.contains("\u{2764}\u{FE0F}"));
    }

    #[test]
    fn test_refuses_when_too_small() {
        let mut surface = RecordingSurface::new(30, 10);
        let mut text_box = TextBox::new("Welcome", ["hello"]);
        text_box.layout(surface.size().unwrap());
        text_box.render(&mut surface).unwrap();
        assert!(surface.touched_rows().is_empty());
    }
}
