//! Slider rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{ControlState, FocusState, Slider, SliderColors, SliderLayout};

/// Render a slider at the left edge of `area`
///
/// The track shrinks when `area` is narrower than the slider's preferred width.
pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    slider: &Slider,
    state: &ControlState,
    colors: &SliderColors,
) -> SliderLayout {
    let label_width = slider.label_width();
    if area.height == 0 || area.width < label_width + 3 {
        return SliderLayout::default();
    }

    let track_width = slider.track_width.min(area.width - label_width - 1);
    let knob_index = (slider.fraction() * (track_width - 1) as f64).round() as u16;

    let (filled, rest, knob) = match state.focus {
        FocusState::Normal => (colors.filled, colors.track, colors.knob),
        FocusState::Focused | FocusState::Hovered => (colors.filled, colors.track, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };
    let mut knob_style = Style::default().fg(knob);
    if state.dragging {
        knob_style = knob_style.add_modifier(Modifier::BOLD);
    }
    let label_color = if state.focus == FocusState::Disabled {
        colors.disabled
    } else {
        colors.label
    };

    let label = slider.format_value(slider.clamp(slider.binding.get()));
    let line = Line::from(vec![
        Span::styled("━".repeat(knob_index as usize), Style::default().fg(filled)),
        Span::styled("●", knob_style),
        Span::styled(
            "─".repeat((track_width - knob_index - 1) as usize),
            Style::default().fg(rest),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{:>width$}", label, width = label_width as usize),
            Style::default().fg(label_color),
        ),
    ]);

    let full_area = Rect::new(area.x, area.y, track_width + 1 + label_width, 1);
    frame.render_widget(Paragraph::new(line), full_area);

    SliderLayout {
        track_area: Rect::new(area.x, area.y, track_width, 1),
        full_area,
    }
}
