//! Description box beside the menu
//!
//! Only shown on wide terminals. Each line handed in is word-wrapped to the
//! inner width; an empty line produces a blank row.

use std::io;

use ratatui::layout::Size;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::layout;
use crate::tui::region::{Panel, Region};
use crate::tui::surface::Surface;
use crate::tui::text::{split_at_width, text_width};
use crate::tui::theme::Theme;

#[derive(Debug)]
pub struct DescriptionBox {
    region: Region,
    title: String,
    lines: Vec<String>,
}

impl DescriptionBox {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            region: Region::new("description"),
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Rows actually drawn for the current content and region
    pub fn wrapped(&self) -> Vec<String> {
        let width = usize::from(self.region.area().width.saturating_sub(4));
        let rows = usize::from(self.region.area().height.saturating_sub(2));
        let mut out = Vec::new();
        for line in &self.lines {
            if line.is_empty() {
                out.push(String::new());
            } else {
                out.extend(wrap(line, width));
            }
        }
        out.truncate(rows);
        out
    }
}

impl Panel for DescriptionBox {
    fn region(&self) -> &Region {
        &self.region
    }

    fn layout(&mut self, size: Size) {
        self.region.place(
            layout::description(size),
            layout::fits(size) && layout::is_wide(size),
        );
    }

    fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        if !self.region.is_visible() {
            return Ok(());
        }
        self.region.erase(surface)?;
        self.region
            .draw_border(surface, &self.title, Theme::border(), Theme::title())?;
        for (index, row) in self.wrapped().iter().enumerate() {
            self.region
                .print(surface, 2, index as u16 + 1, row, Theme::normal())?;
        }
        Ok(())
    }
}

/// Greedy word wrap to `width` display columns
///
/// Words longer than a full row are split across rows.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let used = text_width(&current);
            let gap = usize::from(used > 0);
            if used + gap + text_width(word) <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if used > 0 {
                rows.push(std::mem::take(&mut current));
                continue;
            }
            let (head, tail) = break_word(word, width);
            rows.push(head.to_string());
            word = tail;
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn break_word(word: &str, width: usize) -> (&str, &str) {
    match split_at_width(word, width) {
        // always take at least one grapheme so wrapping makes progress
        ("", _) => {
            let first = word.graphemes(true).next().map_or(0, str::len);
            word.split_at(first)
        }
        split => split,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::surface::testing::{screen_text, RecordingSurface};
    use crate::tui::surface::Screen;

    #[test]
    fn test_wrap_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_degenerate_widths() {
        assert!(wrap("anything", 0).is_empty());
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    }

    #[test]
    fn test_wrap_keeps_emoji_sequences_whole() {
        let heart = "\u{2764}\u{FE0F}";
        let rows = wrap(&heart.repeat(5), 4);
        assert_eq!(rows, vec![heart.repeat(2), heart.repeat(2), heart.to_string()]);
        assert_eq!(wrap(heart, 1), vec![heart]);
    }

    #[test]
    fn test_hidden_on_narrow_terminal() {
        let mut surface = RecordingSurface::new(60, 24);
        let mut desc = DescriptionBox::new("Description");
        desc.set_lines(vec!["hello".into()]);
        desc.layout(surface.size().unwrap());
        desc.render(&mut surface).unwrap();
        assert!(surface.touched_rows().is_empty());
    }

    #[test]
    fn test_blank_lines_and_wrapping() {
        let mut screen = Screen::new(TestBackend::new(80, 24));
        let mut desc = DescriptionBox::new("Description");
        desc.set_lines(vec![
            "A text adventure set in the Great Underground Empire".into(),
            String::new(),
            "Version: 88".into(),
        ]);
        desc.layout(screen.size().unwrap());
        desc.render(&mut screen).unwrap();

        // inner width 36 - 4 = 32
        assert_eq!(
            desc.wrapped(),
            vec![
                "A text adventure set in the",
                "Great Underground Empire",
                "",
                "Version: 88",
            ]
        );
        let text = screen_text(&screen);
        assert!(text[2].contains("─ Description ─"));
        assert!(text[3].contains("A text adventure set in the"));
        assert!(text[6].contains("Version: 88"));
    }

    #[test]
    fn test_overflow_truncated_to_box() {
        let mut screen = Screen::new(TestBackend::new(80, 24));
        let mut desc = DescriptionBox::new("Description");
        desc.set_lines((0..50).map(|i| format!("line {i}")).collect());
        desc.layout(screen.size().unwrap());
        assert_eq!(desc.wrapped().len(), 18);
    }
}
