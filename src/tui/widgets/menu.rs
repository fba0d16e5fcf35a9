//! Selectable list of menu entry names

use std::io;

use crossterm::event::KeyCode;
use ratatui::layout::Size;

use crate::tui::layout::{self, Content};
use crate::tui::region::{Panel, Region};
use crate::tui::surface::Surface;
use crate::tui::text::fit;
use crate::tui::theme::Theme;

/// Bordered list with one highlighted entry
///
/// Moving the selection only redraws the two affected rows, unless the
/// move scrolls the list, in which case the visible rows are redrawn.
#[derive(Debug)]
pub struct MenuPanel {
    region: Region,
    title: String,
    entries: Vec<String>,
    selected: usize,
    top: usize,
}

impl MenuPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            region: Region::new("menu"),
            title: title.into(),
            entries: Vec::new(),
            selected: 0,
            top: 0,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the listed names; `selected` is clamped into range
    pub fn set_entries(&mut self, entries: Vec<String>, selected: usize) {
        self.selected = selected.min(entries.len().saturating_sub(1));
        self.entries = entries;
        self.top = 0;
        self.scroll_to_selection();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection up with wraparound; returns whether the list scrolled
    pub fn select_previous(&mut self) -> bool {
        let n = self.entries.len();
        if n == 0 {
            return false;
        }
        self.selected = (self.selected + n - 1) % n;
        self.scroll_to_selection()
    }

    /// Move the selection down with wraparound; returns whether the list scrolled
    pub fn select_next(&mut self) -> bool {
        let n = self.entries.len();
        if n == 0 {
            return false;
        }
        self.selected = (self.selected + 1) % n;
        self.scroll_to_selection()
    }

    fn rows(&self) -> usize {
        usize::from(self.region.area().height.saturating_sub(2))
    }

    fn scroll_to_selection(&mut self) -> bool {
        let rows = self.rows().max(1);
        let before = self.top;
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + rows {
            self.top = self.selected + 1 - rows;
        }
        self.top != before
    }

    fn draw_entry(&self, surface: &mut dyn Surface, index: usize) -> io::Result<()> {
        if index < self.top || index >= self.top + self.rows() {
            return Ok(());
        }
        let Some(name) = self.entries.get(index) else {
            return Ok(());
        };
        let room = usize::from(self.region.area().width.saturating_sub(4));
        let padded = fit(name, room);
        let style = if index == self.selected {
            Theme::selected()
        } else {
            Theme::normal()
        };
        self.region
            .print(surface, 2, (index - self.top) as u16 + 1, &padded, style)
    }
}

impl Panel for MenuPanel {
    fn region(&self) -> &Region {
        &self.region
    }

    fn layout(&mut self, size: Size) {
        let content = Content::measure(&self.entries, &self.title);
        self.region
            .place(layout::menu(size, content), layout::fits(size));
        self.scroll_to_selection();
    }

    fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        if !self.region.is_visible() {
            return Ok(());
        }
        self.region.erase(surface)?;
        self.region
            .draw_border(surface, &self.title, Theme::border(), Theme::title())?;
        let end = (self.top + self.rows()).min(self.entries.len());
        for index in self.top..end {
            self.draw_entry(surface, index)?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, surface: &mut dyn Surface) -> io::Result<bool> {
        let previous = self.selected;
        let scrolled = match key {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            _ => return Ok(false),
        };
        if !self.region.is_visible() {
            return Ok(true);
        }
        if scrolled {
            self.render(surface)?;
        } else {
            self.draw_entry(surface, previous)?;
            self.draw_entry(surface, self.selected)?;
        }
        Ok(true)
    }
}
