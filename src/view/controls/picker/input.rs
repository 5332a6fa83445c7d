//! Picker input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{ControlState, FocusState, Picker, PickerLayout, PickerMenuLayout};

/// Events that can be returned from picker input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The menu was opened
    Opened,
    /// The option at this index was written to the binding
    Selected(usize),
    /// The menu was closed without a selection
    Cancelled,
    /// The highlight moved inside the open menu
    Highlighted(usize),
    /// Mouse is hovering over the button
    Hovered,
    /// Mouse left the button
    Left,
}

impl Picker {
    /// Handle a mouse event for this picker
    ///
    /// `menu` is the layout of the open menu from the last frame, if any.
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &PickerLayout,
        menu: Option<&PickerMenuLayout>,
    ) -> Option<PickerEvent> {
        if !state.is_enabled() {
            return None;
        }

        let (x, y) = (event.column, event.row);
        let menu = menu.filter(|_| state.open);
        let on_option = menu.and_then(|m| m.option_at(x, y));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = on_option {
                    self.select(state, index).map(PickerEvent::Selected)
                } else if state.open {
                    if menu.is_some_and(|m| m.contains(x, y)) {
                        // Border or scroll area inside the menu
                        return None;
                    }
                    self.cancel(state);
                    Some(PickerEvent::Cancelled)
                } else if layout.contains(x, y) {
                    self.open(state).then_some(PickerEvent::Opened)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => {
                if let Some(index) = on_option {
                    if state.highlighted == Some(index) {
                        return None;
                    }
                    state.highlighted = Some(index);
                    return Some(PickerEvent::Highlighted(index));
                }
                state
                    .track_hover(layout.contains(x, y))
                    .map(|entered| {
                        if entered {
                            PickerEvent::Hovered
                        } else {
                            PickerEvent::Left
                        }
                    })
            }
            MouseEventKind::ScrollDown if state.open => {
                self.scroll_by(state, 1);
                None
            }
            MouseEventKind::ScrollUp if state.open => {
                self.scroll_by(state, -1);
                None
            }
            _ => None,
        }
    }

    /// Handle a keyboard event (when focused)
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<PickerEvent> {
        if !state.is_enabled() || state.focus != FocusState::Focused {
            return None;
        }

        if !state.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open(state).then_some(PickerEvent::Opened)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlight_prev(state);
                state.highlighted.map(PickerEvent::Highlighted)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.highlight_next(state);
                state.highlighted.map(PickerEvent::Highlighted)
            }
            KeyCode::Home => {
                state.highlighted = Some(0);
                self.ensure_visible(state);
                Some(PickerEvent::Highlighted(0))
            }
            KeyCode::End => {
                let last = self.options.len().saturating_sub(1);
                state.highlighted = Some(last);
                self.ensure_visible(state);
                Some(PickerEvent::Highlighted(last))
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.confirm(state).map(PickerEvent::Selected),
            KeyCode::Esc | KeyCode::Backspace => {
                self.cancel(state);
                Some(PickerEvent::Cancelled)
            }
            // Swallow everything else while the menu is open
            _ => state.highlighted.map(PickerEvent::Highlighted),
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

    fn setup() -> (Rc<Cell<usize>>, Picker, PickerLayout, PickerMenuLayout) {
        let value = Rc::new(Cell::new(0));
        let picker = Picker::new(
            Binding::from_cell(&value),
            vec!["Light".into(), "Dark".into(), "Auto".into()],
        );
        let layout = PickerLayout {
            button_area: Rect::new(10, 0, 9, 1),
        };
        let menu = PickerMenuLayout {
            area: Rect::new(10, 1, 9, 3),
            option_areas: (0..3).map(|i| (i, Rect::new(10, 1 + i as u16, 9, 1))).collect(),
        };
        (value, picker, layout, menu)
    }

    #[test]
    fn test_click_opens_then_selects() {
        let (value, picker, layout, menu) = setup();
        let mut state = ControlState::default();

        let open = mouse(MouseEventKind::Down(MouseButton::Left), 12, 0);
        assert_eq!(
            picker.handle_mouse(&mut state, open, &layout, None),
            Some(PickerEvent::Opened)
        );

        let choose = mouse(MouseEventKind::Down(MouseButton::Left), 12, 3);
        assert_eq!(
            picker.handle_mouse(&mut state, choose, &layout, Some(&menu)),
            Some(PickerEvent::Selected(2))
        );
        assert_eq!(value.get(), 2);
        assert!(!state.open);
    }

    #[test]
    fn test_click_outside_open_menu_cancels() {
        let (value, picker, layout, menu) = setup();
        let mut state = ControlState::default();
        picker.open(&mut state);

        let away = mouse(MouseEventKind::Down(MouseButton::Left), 0, 8);
        assert_eq!(
            picker.handle_mouse(&mut state, away, &layout, Some(&menu)),
            Some(PickerEvent::Cancelled)
        );
        assert_eq!(value.get(), 0);
        assert!(!state.open);
    }

    #[test]
    fn test_click_on_menu_border_keeps_menu_open() {
        let (value, picker, layout, mut menu) = setup();
        menu.area = Rect::new(9, 1, 11, 5);
        let mut state = ControlState::default();
        picker.open(&mut state);

        let border = mouse(MouseEventKind::Down(MouseButton::Left), 9, 2);
        assert_eq!(
            picker.handle_mouse(&mut state, border, &layout, Some(&menu)),
            None
        );
        let below_options = mouse(MouseEventKind::Down(MouseButton::Left), 12, 5);
        assert_eq!(
            picker.handle_mouse(&mut state, below_options, &layout, Some(&menu)),
            None
        );
        assert!(state.open);
        assert_eq!(value.get(), 0);
    }

    #[test]
    fn test_hover_moves_highlight() {
        let (_value, picker, layout, menu) = setup();
        let mut state = ControlState::default();
        picker.open(&mut state);

        let over = mouse(MouseEventKind::Moved, 12, 2);
        assert_eq!(
            picker.handle_mouse(&mut state, over, &layout, Some(&menu)),
            Some(PickerEvent::Highlighted(1))
        );
        // Same option again is not an event
        assert_eq!(picker.handle_mouse(&mut state, over, &layout, Some(&menu)), None);
    }

    #[test]
    fn test_keyboard_flow() {
        let (value, picker, _layout, _menu) = setup();
        let mut state = ControlState::default().with_focus(FocusState::Focused);

        assert_eq!(
            picker.handle_key(&mut state, key(KeyCode::Enter)),
            Some(PickerEvent::Opened)
        );
        assert_eq!(
            picker.handle_key(&mut state, key(KeyCode::Down)),
            Some(PickerEvent::Highlighted(1))
        );
        assert_eq!(value.get(), 0);
        assert_eq!(
            picker.handle_key(&mut state, key(KeyCode::Enter)),
            Some(PickerEvent::Selected(1))
        );
        assert_eq!(value.get(), 1);
    }

    #[test]
    fn test_escape_cancels() {
        let (value, picker, _layout, _menu) = setup();
        let mut state = ControlState::default().with_focus(FocusState::Focused);
        picker.handle_key(&mut state, key(KeyCode::Enter));
        picker.handle_key(&mut state, key(KeyCode::End));

        assert_eq!(
            picker.handle_key(&mut state, key(KeyCode::Esc)),
            Some(PickerEvent::Cancelled)
        );
        assert_eq!(value.get(), 0);
    }
}
