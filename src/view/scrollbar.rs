//! Vertical scrollbar for settings pages taller than their viewport

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme::SettingsTheme;

/// Scroll position of a page, in lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarState {
    /// Total number of lines in the page
    pub total_lines: usize,
    /// Lines that fit in the viewport
    pub visible_lines: usize,
    /// First visible line
    pub offset: usize,
}

impl ScrollbarState {
    pub fn new(total_lines: usize, visible_lines: usize, offset: usize) -> Self {
        Self {
            total_lines,
            visible_lines,
            offset,
        }
    }

    /// Largest valid offset
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Whether the content overflows the viewport
    pub fn is_scrollable(&self) -> bool {
        self.max_offset() > 0
    }

    /// (thumb_start, thumb_len) within a track of `track_len` rows
    pub fn thumb_geometry(&self, track_len: usize) -> (usize, usize) {
        if track_len == 0 || self.total_lines == 0 {
            return (0, 0);
        }
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return (0, track_len);
        }

        let thumb_len = ((self.visible_lines as f64 / self.total_lines as f64) * track_len as f64)
            .ceil() as usize;
        let thumb_len = thumb_len.clamp(1, track_len);

        let ratio = self.offset.min(max_offset) as f64 / max_offset as f64;
        let thumb_start = (ratio * (track_len - thumb_len) as f64).round() as usize;
        (thumb_start, thumb_len)
    }

    /// Offset that puts the thumb under a click on track row `row`
    pub fn offset_for_row(&self, track_len: usize, row: usize) -> usize {
        if track_len <= 1 {
            return 0;
        }
        let ratio = row.min(track_len - 1) as f64 / (track_len - 1) as f64;
        ((ratio * self.max_offset() as f64).round() as usize).min(self.max_offset())
    }
}

/// Colors for the scrollbar
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarColors {
    pub track: Color,
    pub thumb: Color,
}

impl ScrollbarColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            track: theme.border_fg,
            thumb: theme.secondary_fg,
        }
    }
}

/// Render a one-column scrollbar into `area`
pub fn render_scrollbar(
    frame: &mut Frame,
    area: Rect,
    state: &ScrollbarState,
    colors: &ScrollbarColors,
) {
    let track_len = area.height as usize;
    if track_len == 0 || area.width == 0 {
        return;
    }

    let (thumb_start, thumb_len) = state.thumb_geometry(track_len);
    for row in 0..track_len {
        let in_thumb = row >= thumb_start && row < thumb_start + thumb_len;
        let (glyph, color) = if in_thumb {
            ("█", colors.thumb)
        } else {
            ("│", colors.track)
        };
        let cell = Rect::new(area.x, area.y + row as u16, 1, 1);
        frame.render_widget(Paragraph::new(glyph).style(Style::default().fg(color)), cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_fits() {
        let state = ScrollbarState::new(5, 10, 0);
        assert!(!state.is_scrollable());
        assert_eq!(state.thumb_geometry(10), (0, 10));
    }

    #[test]
    fn test_thumb_tracks_offset() {
        let top = ScrollbarState::new(40, 10, 0);
        assert_eq!(top.thumb_geometry(10).0, 0);

        let bottom = ScrollbarState::new(40, 10, 30);
        let (start, len) = bottom.thumb_geometry(10);
        assert_eq!(start + len, 10);
    }

    #[test]
    fn test_offset_for_row() {
        let state = ScrollbarState::new(40, 10, 0);
        assert_eq!(state.offset_for_row(10, 0), 0);
        assert_eq!(state.offset_for_row(10, 9), 30);
        assert_eq!(state.offset_for_row(10, 99), 30);
    }
}
