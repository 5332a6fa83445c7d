//! Toggle rendering functions

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{ControlState, FocusState, Toggle, ToggleColors, ToggleLayout};

/// Render a toggle switch at the left edge of `area`
///
/// # Returns
/// Layout information for hit testing
pub fn render_toggle(
    frame: &mut Frame,
    area: Rect,
    toggle: &Toggle,
    state: &ControlState,
    colors: &ToggleColors,
) -> ToggleLayout {
    if area.height == 0 || area.width < Toggle::WIDTH {
        return ToggleLayout::default();
    }

    let (bracket_color, mark_color) = match state.focus {
        FocusState::Normal => (colors.bracket, colors.checkmark),
        FocusState::Focused | FocusState::Hovered => (colors.focused, colors.checkmark),
        FocusState::Disabled => (colors.disabled, colors.disabled),
    };

    let mark = if toggle.is_on() { "x" } else { " " };
    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(mark, Style::default().fg(mark_color)),
        Span::styled("]", Style::default().fg(bracket_color)),
    ]);

    let switch_area = Rect::new(area.x, area.y, Toggle::WIDTH, 1);
    frame.render_widget(Paragraph::new(line), switch_area);

    ToggleLayout { switch_area }
}
