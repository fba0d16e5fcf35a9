//! Panel geometry
//!
//! Each panel kind has its own placement rule, computed from the terminal
//! size and the panel's content. Every rule returns a rectangle that fits
//! entirely on screen.

use ratatui::layout::{Rect, Size};

use crate::tui::text::text_width;

/// Smallest usable terminal width
pub const MIN_COLS: u16 = 40;

/// Smallest usable terminal height
pub const MIN_ROWS: u16 = 24;

/// Width from which the description box fits beside the menu
pub const WIDE_COLS: u16 = 80;

/// Narrowest content width given to menus and text boxes
const MIN_CONTENT_WIDTH: u16 = 10;

/// Content metrics a panel is sized to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Content {
    pub lines: u16,
    pub max_width: u16,
    pub title_len: u16,
}

impl Content {
    /// Measure display widths of `lines` and `title`
    pub fn measure<S: AsRef<str>>(lines: &[S], title: &str) -> Self {
        let max_width = lines
            .iter()
            .map(|line| text_width(line.as_ref()))
            .max()
            .unwrap_or(0);
        Self {
            lines: clamp_u16(lines.len()),
            max_width: clamp_u16(max_width),
            title_len: clamp_u16(text_width(title)),
        }
    }

    fn widest(&self) -> u16 {
        self.max_width
            .max(self.title_len.saturating_add(2))
            .max(MIN_CONTENT_WIDTH)
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Whether the terminal is large enough to draw anything meaningful
pub fn fits(size: Size) -> bool {
    size.width >= MIN_COLS && size.height >= MIN_ROWS
}

/// Whether the description box has room beside the menu
pub fn is_wide(size: Size) -> bool {
    size.width >= WIDE_COLS
}

fn clip(rect: Rect, size: Size) -> Rect {
    rect.intersection(Rect::new(0, 0, size.width, size.height))
}

/// Top row, full width
pub fn header(size: Size) -> Rect {
    clip(Rect::new(0, 0, size.width, 1), size)
}

/// Bottom row, full width
pub fn footer(size: Size) -> Rect {
    clip(
        Rect::new(0, size.height.saturating_sub(1), size.width, 1),
        size,
    )
}

/// Left-aligned menu sized to its entries
pub fn menu(size: Size, content: Content) -> Rect {
    let budget = if is_wide(size) {
        (size.width / 2).saturating_sub(4)
    } else {
        size.width.saturating_sub(8)
    };
    let width = budget.min(content.widest()).saturating_add(4);
    let height = size
        .height
        .saturating_sub(4)
        .min(content.lines.saturating_add(2));
    clip(Rect::new(2, 2, width, height), size)
}

/// Right half of the screen beside the menu
pub fn description(size: Size) -> Rect {
    let width = (size.width / 2).saturating_sub(4);
    let height = size.height.saturating_sub(4);
    clip(Rect::new(size.width / 2 + 2, 2, width, height), size)
}

/// Centered box sized to its lines; `padding` columns surround the text
pub fn text_box(size: Size, content: Content, padding: u16) -> Rect {
    let width = size
        .width
        .saturating_sub(padding)
        .min(content.widest())
        .saturating_add(padding);
    let height = size
        .height
        .saturating_sub(4)
        .min(content.lines.saturating_add(2));
    let x = size.width.saturating_sub(width) / 2;
    let y = (size.height.saturating_sub(height) / 2).saturating_sub(1);
    clip(Rect::new(x, y, width, height), size)
}
