//! Stepper input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{ControlState, FocusState, Stepper, StepperLayout};

/// Events that can be returned from stepper input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperEvent {
    /// The value went up by one
    Incremented(i64),
    /// The value went down by one
    Decremented(i64),
    /// Mouse is hovering over the stepper
    Hovered,
    /// Mouse left the stepper
    Left,
}

impl Stepper {
    /// Handle a mouse event for this stepper
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &StepperLayout,
    ) -> Option<StepperEvent> {
        if !state.is_enabled() {
            return None;
        }

        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.is_decrement(x, y) {
                    self.decrement(state).map(StepperEvent::Decremented)
                } else if layout.is_increment(x, y) {
                    self.increment(state).map(StepperEvent::Incremented)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => state.track_hover(layout.contains(x, y)).map(|entered| {
                if entered {
                    StepperEvent::Hovered
                } else {
                    StepperEvent::Left
                }
            }),
            _ => None,
        }
    }

    /// Handle a keyboard event (when focused)
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<StepperEvent> {
        if !state.is_enabled() || state.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.increment(state).map(StepperEvent::Incremented)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.decrement(state).map(StepperEvent::Decremented)
            }
            _ => None,
        }
    }
}
