//! Color picker rendering functions

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{
    hex_label, ColorPicker, ColorPickerColors, ColorPickerLayout, ControlState, FocusState,
    PaletteLayout, LABEL_WIDTH,
};
use crate::view::icons::pad_to_width;

/// Render the closed color picker at the left edge of `area`
pub fn render_color_picker(
    frame: &mut Frame,
    area: Rect,
    picker: &ColorPicker,
    state: &ControlState,
    colors: &ColorPickerColors,
) -> ColorPickerLayout {
    if area.height == 0 || area.width < ColorPicker::WIDTH {
        return ColorPickerLayout::default();
    }

    let color = picker.color();
    let label_color = match state.focus {
        FocusState::Normal => colors.label,
        FocusState::Focused | FocusState::Hovered => colors.focused,
        FocusState::Disabled => colors.disabled,
    };

    let line = Line::from(vec![
        Span::styled("██", Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(
            pad_to_width(&hex_label(color), LABEL_WIDTH),
            Style::default().fg(label_color),
        ),
    ]);

    let full_area = Rect::new(area.x, area.y, ColorPicker::WIDTH, 1);
    frame.render_widget(Paragraph::new(line), full_area);

    ColorPickerLayout {
        swatch_area: Rect::new(area.x, area.y, 2, 1),
        full_area,
    }
}

/// Render the open palette as a bordered overlay next to `anchor`.
///
/// Swatches wrap into rows to fit `bounds`; the palette is right-aligned
/// with the anchor and opens below it when there is room.
pub fn render_palette(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    picker: &ColorPicker,
    state: &ControlState,
    colors: &ColorPickerColors,
) -> PaletteLayout {
    let count = picker.palette.len() as u16;
    if !state.open || count == 0 || bounds.width < ColorPicker::SWATCH_WIDTH + 2 || bounds.height < 3 {
        return PaletteLayout::default();
    }

    let columns = ((bounds.width - 2) / ColorPicker::SWATCH_WIDTH).min(count).max(1);
    let rows = count.div_ceil(columns);
    let width = columns * ColorPicker::SWATCH_WIDTH + 2;
    let height = (rows + 2).min(bounds.height);

    let x = anchor
        .right()
        .saturating_sub(width)
        .max(bounds.x)
        .min(bounds.right().saturating_sub(width));
    let y = if anchor.bottom() + height <= bounds.bottom() {
        anchor.bottom()
    } else if anchor.y >= bounds.y + height {
        anchor.y - height
    } else {
        bounds.bottom().saturating_sub(height).max(bounds.y)
    };

    let area = Rect::new(x, y, width, height);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.popup_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut swatch_areas = Vec::with_capacity(count as usize);
    for (index, color) in picker.palette.iter().enumerate() {
        let row = index as u16 / columns;
        let column = index as u16 % columns;
        if row >= inner.height {
            break;
        }
        let cell = Rect::new(
            inner.x + column * ColorPicker::SWATCH_WIDTH,
            inner.y + row,
            ColorPicker::SWATCH_WIDTH,
            1,
        );
        let (open, close) = if state.highlighted == Some(index) {
            ("[", "]")
        } else {
            (" ", " ")
        };
        let bracket = Style::default().fg(colors.focused);
        let line = Line::from(vec![
            Span::styled(open, bracket),
            Span::styled("██", Style::default().fg(*color)),
            Span::styled(close, bracket),
        ]);
        frame.render_widget(Paragraph::new(line), cell);
        swatch_areas.push(cell);
    }

    PaletteLayout { area, swatch_areas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use crate::view::controls::test_support::{render_buffer, row_text};
    use ratatui::style::Color;

    #[test]
    fn test_closed_shows_swatch_and_hex() {
        let picker = ColorPicker::new(Binding::constant(Color::Rgb(255, 59, 48)));
        let buffer = render_buffer(12, 1, |frame, area| {
            let layout = render_color_picker(
                frame,
                area,
                &picker,
                &ControlState::default(),
                &ColorPickerColors::default(),
            );
            assert_eq!(layout.full_area.width, ColorPicker::WIDTH);
        });
        assert_eq!(row_text(&buffer, 0), "██ #FF3B30  ");
        assert_eq!(buffer[(0, 0)].fg, Color::Rgb(255, 59, 48));
    }

    #[test]
    fn test_palette_wraps_to_bounds() {
        let picker = ColorPicker::new(Binding::constant(Color::Black));
        let state = ControlState {
            open: true,
            highlighted: Some(0),
            ..ControlState::default()
        };
        render_buffer(34, 12, |frame, bounds| {
            let anchor = Rect::new(24, 0, ColorPicker::WIDTH, 1);
            let palette = render_palette(
                frame,
                anchor,
                bounds,
                &picker,
                &state,
                &ColorPickerColors::default(),
            );
            // (34 - 2) / 4 = 8 columns, two rows
            assert_eq!(palette.area, Rect::new(0, 1, 34, 4));
            assert_eq!(palette.swatch_areas.len(), 16);
            assert_eq!(palette.swatch_at(5, 2), Some(1));
            assert_eq!(palette.swatch_at(1, 3), Some(8));
        });
    }

    #[test]
    fn test_palette_marks_highlight() {
        let picker = ColorPicker::new(Binding::constant(Color::Black))
            .with_palette(vec![Color::Red, Color::Blue]);
        let state = ControlState {
            open: true,
            highlighted: Some(1),
            ..ControlState::default()
        };
        let buffer = render_buffer(20, 5, |frame, bounds| {
            render_palette(
                frame,
                Rect::new(10, 0, 10, 1),
                bounds,
                &picker,
                &state,
                &ColorPickerColors::default(),
            );
        });
        assert!(row_text(&buffer, 2).contains(" ██ [██]"));
    }
}
