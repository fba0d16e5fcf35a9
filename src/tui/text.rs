//! Display width of terminal text
//!
//! Everything that measures, truncates or wraps text goes through these
//! functions so that layout, padding and drawing agree on how many columns
//! a string takes. Text is measured per grapheme cluster: an emoji sequence
//! such as `❤️` (base + VS16) is one 2-column glyph, not a 1-column base
//! followed by an invisible selector.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of one grapheme cluster in terminal cells
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if grapheme.len() == first.len_utf8() {
        return first.width().unwrap_or(0);
    }

    // Regional indicator pair (flag)
    if ('\u{1F1E6}'..='\u{1F1FF}').contains(&first) {
        return 2;
    }
    for ch in chars {
        match ch {
            // ZWJ sequence, emoji presentation, skin tone, keycap
            '\u{200D}' | '\u{FE0F}' | '\u{1F3FB}'..='\u{1F3FF}' | '\u{20E3}' => return 2,
            _ => {}
        }
    }
    // Base plus combining marks
    first.width().unwrap_or(0)
}

/// Display width of `text` in terminal cells
pub fn text_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Longest prefix of `text` that fits in `width` display columns
///
/// Never cuts a grapheme cluster in half.
pub fn truncate(text: &str, width: usize) -> &str {
    split_at_width(text, width).0
}

/// Split `text` after as many whole graphemes as fit in `width` columns
pub fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, grapheme) in text.grapheme_indices(true) {
        used += grapheme_width(grapheme);
        if used > width {
            return text.split_at(index);
        }
    }
    (text, "")
}

/// `text` truncated to `width` columns and padded with spaces to exactly `width`
pub fn fit(text: &str, width: usize) -> String {
    let shown = truncate(text, width);
    let pad = width.saturating_sub(text_width(shown));
    format!("{}{}", shown, " ".repeat(pad))
}
