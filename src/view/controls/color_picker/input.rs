//! Color picker input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::Color;

use super::{ColorPicker, ColorPickerLayout, ControlState, FocusState, PaletteLayout};

/// Events that can be returned from color picker input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPickerEvent {
    /// The palette was opened
    Opened,
    /// This color was written to the binding
    Picked(Color),
    /// The palette was closed without a pick
    Cancelled,
    /// The highlighted swatch changed
    Highlighted(usize),
    /// Mouse is hovering over the control
    Hovered,
    /// Mouse left the control
    Left,
}

impl ColorPicker {
    /// Handle a mouse event for this color picker
    ///
    /// `palette` is the layout of the open palette from the last frame, if any.
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &ColorPickerLayout,
        palette: Option<&PaletteLayout>,
    ) -> Option<ColorPickerEvent> {
        if !state.is_enabled() {
            return None;
        }

        let (x, y) = (event.column, event.row);
        let palette = palette.filter(|_| state.open);
        let on_swatch = palette.and_then(|p| p.swatch_at(x, y));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = on_swatch {
                    self.select(state, index).map(ColorPickerEvent::Picked)
                } else if state.open {
                    if palette.is_some_and(|p| p.contains(x, y)) {
                        // Border or gap inside the palette
                        return None;
                    }
                    self.cancel(state);
                    Some(ColorPickerEvent::Cancelled)
                } else if layout.contains(x, y) {
                    self.open(state).then_some(ColorPickerEvent::Opened)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => {
                if let Some(index) = on_swatch {
                    if state.highlighted == Some(index) {
                        return None;
                    }
                    state.highlighted = Some(index);
                    return Some(ColorPickerEvent::Highlighted(index));
                }
                state.track_hover(layout.contains(x, y)).map(|entered| {
                    if entered {
                        ColorPickerEvent::Hovered
                    } else {
                        ColorPickerEvent::Left
                    }
                })
            }
            _ => None,
        }
    }

    /// Handle a keyboard event (when focused)
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<ColorPickerEvent> {
        if !state.is_enabled() || state.focus != FocusState::Focused {
            return None;
        }

        if !state.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open(state).then_some(ColorPickerEvent::Opened)
                }
                _ => None,
            };
        }

        let step = match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => -1,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                return self.confirm(state).map(ColorPickerEvent::Picked);
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.cancel(state);
                return Some(ColorPickerEvent::Cancelled);
            }
            _ => 0,
        };
        self.move_highlight(state, step);
        state.highlighted.map(ColorPickerEvent::Highlighted)
    }
}
