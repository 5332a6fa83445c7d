//! Toggle input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{ControlState, FocusState, Toggle, ToggleLayout};

/// Events that can be returned from toggle input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    /// The bound value was flipped to the contained value
    Toggled(bool),
    /// Mouse is hovering over the toggle
    Hovered,
    /// Mouse left the toggle area
    Left,
}

impl Toggle {
    /// Handle a mouse event for this toggle
    ///
    /// # Returns
    /// * `Some(ToggleEvent)` if the event was consumed
    /// * `None` if the event was not relevant to this toggle
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &ToggleLayout,
    ) -> Option<ToggleEvent> {
        if !state.is_enabled() {
            return None;
        }

        let inside = layout.contains(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.toggle(state).map(ToggleEvent::Toggled)
            }
            MouseEventKind::Moved => state.track_hover(inside).map(|entered| {
                if entered {
                    ToggleEvent::Hovered
                } else {
                    ToggleEvent::Left
                }
            }),
            _ => None,
        }
    }

    /// Handle a keyboard event (when focused)
    ///
    /// # Returns
    /// * `Some(ToggleEvent::Toggled)` if Enter or Space was pressed
    /// * `None` otherwise
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<ToggleEvent> {
        if !state.is_enabled() || state.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle(state).map(ToggleEvent::Toggled),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use crate::view::controls::test_support::{key, mouse};
    use ratatui::layout::Rect;
    use std::cell::Cell;
    use std::rc::Rc;

    fn make_layout() -> ToggleLayout {
        ToggleLayout {
            switch_area: Rect::new(10, 0, 3, 1),
        }
    }

    fn make_toggle(initial: bool) -> (Rc<Cell<bool>>, Toggle) {
        let value = Rc::new(Cell::new(initial));
        let toggle = Toggle::new(Binding::from_cell(&value));
        (value, toggle)
    }

    #[test]
    fn test_click_toggles() {
        let (value, toggle) = make_toggle(false);
        let mut state = ControlState::default();
        let layout = make_layout();

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 11, 0);
        assert_eq!(
            toggle.handle_mouse(&mut state, down, &layout),
            Some(ToggleEvent::Toggled(true))
        );
        assert!(value.get());

        assert_eq!(
            toggle.handle_mouse(&mut state, down, &layout),
            Some(ToggleEvent::Toggled(false))
        );
        assert!(!value.get());
    }

    #[test]
    fn test_click_outside_ignored() {
        let (value, toggle) = make_toggle(false);
        let mut state = ControlState::default();

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 2, 0);
        assert!(toggle.handle_mouse(&mut state, down, &make_layout()).is_none());
        assert!(!value.get());
    }

    #[test]
    fn test_hover() {
        let (_value, toggle) = make_toggle(false);
        let mut state = ControlState::default();
        let layout = make_layout();

        let result = toggle.handle_mouse(&mut state, mouse(MouseEventKind::Moved, 11, 0), &layout);
        assert_eq!(result, Some(ToggleEvent::Hovered));
        assert_eq!(state.focus, FocusState::Hovered);

        let result = toggle.handle_mouse(&mut state, mouse(MouseEventKind::Moved, 0, 0), &layout);
        assert_eq!(result, Some(ToggleEvent::Left));
        assert_eq!(state.focus, FocusState::Normal);
    }

    #[test]
    fn test_keyboard_activation() {
        let (value, toggle) = make_toggle(false);
        let mut state = ControlState::default().with_focus(FocusState::Focused);

        assert_eq!(
            toggle.handle_key(&mut state, key(KeyCode::Enter)),
            Some(ToggleEvent::Toggled(true))
        );
        assert_eq!(
            toggle.handle_key(&mut state, key(KeyCode::Char(' '))),
            Some(ToggleEvent::Toggled(false))
        );
        assert!(!value.get());
    }

    #[test]
    fn test_unfocused_ignores_keyboard() {
        let (value, toggle) = make_toggle(false);
        let mut state = ControlState::default();

        assert!(toggle.handle_key(&mut state, key(KeyCode::Enter)).is_none());
        assert!(!value.get());
    }
}
