//! Display-width helpers for icon references and titles
//!
//! Icon references are opaque: whatever the caller passes (a symbol, a Nerd
//! Font glyph, an emoji) is drawn as-is inside a fixed-width column.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the leading icon column, in cells
pub const ICON_WIDTH: u16 = 2;

/// Fit an icon reference into the icon column
pub fn icon_cell(icon: &str) -> String {
    pad_to_width(&truncate_to_width(icon, ICON_WIDTH as usize), ICON_WIDTH as usize)
}

/// Display width of `text` in terminal cells
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` so it occupies at most `width` cells
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Cut `text` to `width` cells, ending in `…` when something was dropped
pub fn ellipsize(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = truncate_to_width(text, width - 1);
    out.push('…');
    out
}

/// Right-pad `text` with spaces up to `width` cells
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = display_width(text);
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}
