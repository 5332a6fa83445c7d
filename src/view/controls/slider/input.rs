//! Slider input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{ControlState, FocusState, Slider, SliderLayout};

/// Events that can be returned from slider input handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// This value was written to the binding
    Changed(f64),
    /// A drag ended
    Released,
    /// Mouse is hovering over the slider
    Hovered,
    /// Mouse left the slider
    Left,
}

impl Slider {
    /// Handle a mouse event for this slider
    ///
    /// A press on the track jumps the knob there and starts a drag; each drag
    /// event writes once until the button is released.
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &SliderLayout,
    ) -> Option<SliderEvent> {
        if !state.is_enabled() {
            return None;
        }

        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !layout.track_contains(x, y) {
                    return None;
                }
                state.dragging = true;
                let value = self.value_at(layout.fraction_at(x));
                self.set_value(state, value).map(SliderEvent::Changed)
            }
            MouseEventKind::Drag(MouseButton::Left) if state.dragging => {
                let value = self.value_at(layout.fraction_at(x));
                self.set_value(state, value).map(SliderEvent::Changed)
            }
            MouseEventKind::Up(MouseButton::Left) if state.dragging => {
                state.dragging = false;
                Some(SliderEvent::Released)
            }
            MouseEventKind::Moved => state.track_hover(layout.contains(x, y)).map(|entered| {
                if entered {
                    SliderEvent::Hovered
                } else {
                    SliderEvent::Left
                }
            }),
            _ => None,
        }
    }

    /// Handle a keyboard event (when focused)
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<SliderEvent> {
        if !state.is_enabled() || state.focus != FocusState::Focused {
            return None;
        }

        let written = match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.increase(state)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.decrease(state),
            _ => None,
        };
        written.map(SliderEvent::Changed)
    }
}
