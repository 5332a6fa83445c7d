//! Read-only status glyph shown at the trailing edge of a row

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::view::theme::SettingsTheme;

/// Which glyph a status accessory shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Checkmark,
    Warning,
}

impl StatusKind {
    pub fn glyph(self) -> &'static str {
        match self {
            StatusKind::Checkmark => "✔",
            StatusKind::Warning => "⚠",
        }
    }

    pub const WIDTH: u16 = 1;
}

#[derive(Debug, Clone, Copy)]
pub struct StatusColors {
    pub checkmark: Color,
    pub warning: Color,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            checkmark: Color::Green,
            warning: Color::Yellow,
        }
    }
}

impl StatusColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            checkmark: theme.success_fg,
            warning: theme.warning_fg,
        }
    }
}

/// Render the glyph at the left edge of `area`, returning the cell used
pub fn render_status(frame: &mut Frame, area: Rect, kind: StatusKind, colors: &StatusColors) -> Rect {
    if area.height == 0 || area.width < StatusKind::WIDTH {
        return Rect::default();
    }
    let color = match kind {
        StatusKind::Checkmark => colors.checkmark,
        StatusKind::Warning => colors.warning,
    };
    let cell = Rect::new(area.x, area.y, StatusKind::WIDTH, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(kind.glyph(), Style::default().fg(color))),
        cell,
    );
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::controls::test_support::{render_buffer, row_text};

    #[test]
    fn test_glyphs() {
        let colors = StatusColors::default();
        let buffer = render_buffer(3, 2, |frame, area| {
            render_status(frame, area, StatusKind::Checkmark, &colors);
            render_status(frame, Rect::new(0, 1, 3, 1), StatusKind::Warning, &colors);
        });
        assert_eq!(row_text(&buffer, 0), "✔  ");
        assert_eq!(row_text(&buffer, 1), "⚠  ");
        assert_eq!(buffer[(0, 0)].fg, Color::Green);
        assert_eq!(buffer[(0, 1)].fg, Color::Yellow);
    }
}
