//! Toggle (switch) control for boolean bindings
//!
//! Renders as: `[x]` or `[ ]`
//!
//! This module provides a complete toggle component with:
//! - Value access through a `Binding<bool>` (`Toggle`)
//! - Rendering (`render_toggle`)
//! - Input handling (`Toggle::handle_mouse`, `handle_key`)
//! - Layout/hit testing (`ToggleLayout`)

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::ToggleEvent;
pub use render::render_toggle;

use super::{rect_contains, ControlState, FocusState};
use crate::binding::Binding;
use crate::view::theme::SettingsTheme;

/// A two-state switch bound to caller state
#[derive(Debug, Clone)]
pub struct Toggle {
    pub binding: Binding<bool>,
}

impl Toggle {
    /// Rendered width in cells
    pub const WIDTH: u16 = 3;

    pub fn new(binding: Binding<bool>) -> Self {
        Self { binding }
    }

    /// Current bound value
    pub fn is_on(&self) -> bool {
        self.binding.get()
    }

    /// Flip the bound value, returning the new value.
    ///
    /// Does nothing for disabled controls.
    pub fn toggle(&self, state: &ControlState) -> Option<bool> {
        if !state.is_enabled() {
            return None;
        }
        let next = !self.binding.get();
        self.binding.set(next);
        tracing::trace!("toggle set to {}", next);
        Some(next)
    }
}

/// Colors for the toggle control
#[derive(Debug, Clone, Copy)]
pub struct ToggleColors {
    /// Bracket color
    pub bracket: Color,
    /// Mark color when on
    pub checkmark: Color,
    /// Focused bracket color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self {
            bracket: Color::Gray,
            checkmark: Color::Green,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl ToggleColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            bracket: theme.secondary_fg,
            checkmark: theme.success_fg,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleLayout {
    /// The switch area (clickable)
    pub switch_area: Rect,
}

impl ToggleLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.switch_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::controls::test_support::{render_buffer, row_text};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_renders_bound_value() {
        let value = Rc::new(Cell::new(true));
        let toggle = Toggle::new(Binding::from_cell(&value));
        let colors = ToggleColors::default();

        let buffer = render_buffer(5, 1, |frame, area| {
            let layout = render_toggle(frame, area, &toggle, &ControlState::default(), &colors);
            assert_eq!(layout.switch_area.width, 3);
        });
        assert_eq!(row_text(&buffer, 0), "[x]  ");

        value.set(false);
        let buffer = render_buffer(5, 1, |frame, area| {
            render_toggle(frame, area, &toggle, &ControlState::default(), &colors);
        });
        assert_eq!(row_text(&buffer, 0), "[ ]  ");
    }

    #[test]
    fn test_toggle_render_is_stable() {
        let value = Rc::new(Cell::new(false));
        let toggle = Toggle::new(Binding::from_cell(&value));
        let colors = ToggleColors::default();
        let draw = || {
            render_buffer(3, 1, |frame, area| {
                render_toggle(frame, area, &toggle, &ControlState::default(), &colors);
            })
        };

        let first = draw();
        value.set(true);
        value.set(false);
        let second = draw();
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_flips_binding() {
        let value = Rc::new(Cell::new(false));
        let toggle = Toggle::new(Binding::from_cell(&value));
        let state = ControlState::default();

        assert_eq!(toggle.toggle(&state), Some(true));
        assert!(value.get());
        assert_eq!(toggle.toggle(&state), Some(false));
        assert!(!value.get());
    }

    #[test]
    fn test_disabled_toggle_does_not_write() {
        let value = Rc::new(Cell::new(false));
        let toggle = Toggle::new(Binding::from_cell(&value));
        let state = ControlState::default().with_focus(FocusState::Disabled);

        assert_eq!(toggle.toggle(&state), None);
        assert!(!value.get());
    }

    #[test]
    fn test_toggle_narrow_area() {
        let toggle = Toggle::new(Binding::constant(true));
        render_buffer(2, 1, |frame, area| {
            let layout = render_toggle(
                frame,
                area,
                &toggle,
                &ControlState::default(),
                &ToggleColors::default(),
            );
            assert_eq!(layout, ToggleLayout::default());
        });
    }
}
