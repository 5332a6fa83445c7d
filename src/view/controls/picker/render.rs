//! Picker rendering functions

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use super::{ControlState, FocusState, Picker, PickerColors, PickerLayout, PickerMenuLayout};
use crate::view::icons::{ellipsize, pad_to_width};

/// Render the closed picker button at the left edge of `area`
///
/// # Returns
/// Layout information for hit testing
pub fn render_picker(
    frame: &mut Frame,
    area: Rect,
    picker: &Picker,
    state: &ControlState,
    colors: &PickerColors,
) -> PickerLayout {
    let width = picker.width();
    if area.height == 0 || area.width < width {
        return PickerLayout::default();
    }

    let (selected_color, border_color, arrow_color) = match state.focus {
        FocusState::Normal => (colors.selected, colors.border, colors.arrow),
        FocusState::Focused | FocusState::Hovered => {
            (colors.focused, colors.focused, colors.focused)
        }
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let label_width = picker.label_width();
    let label = pad_to_width(
        &ellipsize(picker.selected_option().unwrap_or(""), label_width),
        label_width,
    );
    let arrow = if state.open { "▲" } else { "▼" };

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(border_color)),
        Span::styled(label, Style::default().fg(selected_color)),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(arrow_color)),
        Span::styled("]", Style::default().fg(border_color)),
    ]);

    let button_area = Rect::new(area.x, area.y, width, 1);
    frame.render_widget(Paragraph::new(line), button_area);

    PickerLayout { button_area }
}

/// Render the open option menu as an overlay anchored to the button.
///
/// The menu opens below `anchor` when it fits inside `bounds`, otherwise
/// above it; it is shifted left to stay inside `bounds`.
pub fn render_picker_menu(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    picker: &Picker,
    state: &ControlState,
    colors: &PickerColors,
) -> PickerMenuLayout {
    if !state.open || picker.options.is_empty() || bounds.width == 0 || bounds.height == 0 {
        return PickerMenuLayout::default();
    }

    let wanted = picker.options.len().min(Picker::MAX_VISIBLE) as u16;
    let below = bounds.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(bounds.y);
    let (menu_y, rows) = if below >= wanted || below >= above {
        (anchor.bottom(), wanted.min(below))
    } else {
        let rows = wanted.min(above);
        (anchor.y - rows, rows)
    };
    if rows == 0 {
        return PickerMenuLayout::default();
    }

    let width = anchor.width.max(picker.width()).min(bounds.width);
    let menu_x = anchor.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let area = Rect::new(menu_x, menu_y, width, rows);
    frame.render_widget(Clear, area);

    let scroll_offset = state
        .scroll_offset
        .min(picker.options.len().saturating_sub(rows as usize));
    let text_width = width.saturating_sub(2) as usize;

    let mut option_areas = Vec::with_capacity(rows as usize);
    for (row, (index, option)) in picker
        .options
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(rows as usize)
        .enumerate()
    {
        let option_area = Rect::new(menu_x, menu_y + row as u16, width, 1);
        let bg = if state.highlighted == Some(index) {
            colors.highlight_bg
        } else {
            colors.menu_bg
        };
        let marker = if picker.selected_index() == Some(index) {
            "✓"
        } else {
            " "
        };
        let text = pad_to_width(&ellipsize(option, text_width), text_width);
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(colors.focused).bg(bg)),
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(text, Style::default().fg(colors.option).bg(bg)),
        ]);
        frame.render_widget(Paragraph::new(line), option_area);
        option_areas.push((index, option_area));
    }

    PickerMenuLayout { area, option_areas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use crate::view::controls::test_support::{render_buffer, row_text};

    fn picker(count: usize) -> Picker {
        Picker::new(
            Binding::constant(0),
            (0..count).map(|i| format!("Option {}", i)).collect(),
        )
    }

    fn open_state() -> ControlState {
        ControlState {
            open: true,
            highlighted: Some(0),
            ..ControlState::default()
        }
    }

    #[test]
    fn test_menu_opens_below_when_room() {
        let picker = picker(3);
        let buffer = render_buffer(20, 6, |frame, bounds| {
            let anchor = Rect::new(2, 0, picker.width(), 1);
            let menu = render_picker_menu(
                frame,
                anchor,
                bounds,
                &picker,
                &open_state(),
                &PickerColors::default(),
            );
            assert_eq!(menu.area.y, 1);
            assert_eq!(menu.option_areas.len(), 3);
            assert_eq!(menu.option_at(3, 2), Some(1));
        });
        assert!(row_text(&buffer, 1).contains("✓ Option 0"));
        assert!(row_text(&buffer, 3).contains("Option 2"));
    }

    #[test]
    fn test_menu_opens_above_near_bottom() {
        let picker = picker(3);
        render_buffer(20, 6, |frame, bounds| {
            let anchor = Rect::new(0, 5, picker.width(), 1);
            let menu = render_picker_menu(
                frame,
                anchor,
                bounds,
                &picker,
                &open_state(),
                &PickerColors::default(),
            );
            assert_eq!(menu.area, Rect::new(0, 2, picker.width(), 3));
        });
    }

    #[test]
    fn test_menu_shows_scrolled_window() {
        let picker = picker(12);
        let state = ControlState {
            scroll_offset: 4,
            ..open_state()
        };
        render_buffer(20, 10, |frame, bounds| {
            let anchor = Rect::new(0, 0, picker.width(), 1);
            let menu = render_picker_menu(
                frame,
                anchor,
                bounds,
                &picker,
                &state,
                &PickerColors::default(),
            );
            assert_eq!(menu.option_areas.len(), Picker::MAX_VISIBLE);
            assert_eq!(menu.option_areas[0].0, 4);
            assert_eq!(menu.option_areas[7].0, 11);
        });
    }

    #[test]
    fn test_closed_menu_renders_nothing() {
        let picker = picker(3);
        render_buffer(20, 6, |frame, bounds| {
            let menu = render_picker_menu(
                frame,
                Rect::new(0, 0, 10, 1),
                bounds,
                &picker,
                &ControlState::default(),
                &PickerColors::default(),
            );
            assert_eq!(menu, PickerMenuLayout::default());
        });
    }
}
