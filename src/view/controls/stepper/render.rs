//! Stepper rendering functions

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{ControlState, FocusState, Stepper, StepperColors, StepperLayout};

/// Render a stepper at the left edge of `area`
///
/// A button whose bound has been reached is drawn in the disabled color.
pub fn render_stepper(
    frame: &mut Frame,
    area: Rect,
    stepper: &Stepper,
    state: &ControlState,
    colors: &StepperColors,
) -> StepperLayout {
    let width = stepper.width();
    if area.height == 0 || area.width < width {
        return StepperLayout::default();
    }

    let (button, value) = match state.focus {
        FocusState::Normal => (colors.button, colors.value),
        FocusState::Focused | FocusState::Hovered => (colors.focused, colors.value),
        FocusState::Disabled => (colors.disabled, colors.disabled),
    };
    let dec_color = if stepper.can_decrement() { button } else { colors.disabled };
    let inc_color = if stepper.can_increment() { button } else { colors.disabled };

    let value_width = stepper.value_width();
    let line = Line::from(vec![
        Span::styled("[-]", Style::default().fg(dec_color)),
        Span::raw(" "),
        Span::styled(
            format!("{:>width$}", stepper.value(), width = value_width as usize),
            Style::default().fg(value),
        ),
        Span::raw(" "),
        Span::styled("[+]", Style::default().fg(inc_color)),
    ]);

    let full_area = Rect::new(area.x, area.y, width, 1);
    frame.render_widget(Paragraph::new(line), full_area);

    StepperLayout {
        decrement_area: Rect::new(area.x, area.y, 3, 1),
        value_area: Rect::new(area.x + 4, area.y, value_width, 1),
        increment_area: Rect::new(area.x + width - 3, area.y, 3, 1),
        full_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use crate::view::controls::test_support::{render_buffer, row_text};

    #[test]
    fn test_render_layout() {
        let stepper = Stepper::new(Binding::constant(7), 0..=100);
        let buffer = render_buffer(14, 1, |frame, area| {
            let layout = render_stepper(
                frame,
                area,
                &stepper,
                &ControlState::default(),
                &StepperColors::default(),
            );
            assert_eq!(layout.decrement_area, Rect::new(0, 0, 3, 1));
            assert_eq!(layout.value_area, Rect::new(4, 0, 3, 1));
            assert_eq!(layout.increment_area, Rect::new(8, 0, 3, 1));
        });
        assert_eq!(row_text(&buffer, 0), "[-]   7 [+]   ");
    }

    #[test]
    fn test_button_at_bound_is_dimmed() {
        let stepper = Stepper::new(Binding::constant(0), 0..=9);
        let colors = StepperColors::default();
        let buffer = render_buffer(9, 1, |frame, area| {
            render_stepper(frame, area, &stepper, &ControlState::default(), &colors);
        });
        assert_eq!(row_text(&buffer, 0), "[-] 0 [+]");
        assert_eq!(buffer[(1, 0)].fg, colors.disabled);
        assert_eq!(buffer[(7, 0)].fg, colors.button);
    }

    #[test]
    fn test_too_narrow_renders_nothing() {
        let stepper = Stepper::new(Binding::constant(0), 0..=9);
        render_buffer(8, 1, |frame, area| {
            let layout = render_stepper(
                frame,
                area,
                &stepper,
                &ControlState::default(),
                &StepperColors::default(),
            );
            assert_eq!(layout, StepperLayout::default());
        });
    }
}
