//! Stepper control for integer bindings
//!
//! Renders as: `[-]   12 [+]`
//!
//! This module provides a complete stepper component with:
//! - Value access through a `Binding<i64>` within a closed range (`Stepper`)
//! - Rendering (`render_stepper`)
//! - Input handling (`Stepper::handle_mouse`, `handle_key`)
//! - Layout/hit testing (`StepperLayout`)

mod input;
mod render;

use std::ops::RangeInclusive;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::StepperEvent;
pub use render::render_stepper;

use super::{clamp_i64, rect_contains, ControlState, FocusState};
use crate::binding::Binding;
use crate::view::theme::SettingsTheme;

/// An increment/decrement control over a closed integer range
#[derive(Debug, Clone)]
pub struct Stepper {
    pub binding: Binding<i64>,
    pub range: RangeInclusive<i64>,
}

impl Stepper {
    pub fn new(binding: Binding<i64>, range: RangeInclusive<i64>) -> Self {
        Self { binding, range }
    }

    fn bounds(&self) -> (i64, i64) {
        (*self.range.start(), *self.range.end())
    }

    /// Current value
    pub fn value(&self) -> i64 {
        self.binding.get()
    }

    /// The `+` button is live
    pub fn can_increment(&self) -> bool {
        let (lo, hi) = self.bounds();
        hi >= lo && self.value() < hi
    }

    /// The `-` button is live
    pub fn can_decrement(&self) -> bool {
        let (lo, hi) = self.bounds();
        hi >= lo && self.value() > lo
    }

    /// Write value + 1, clamped. Nothing is written at the upper bound.
    pub fn increment(&self, state: &ControlState) -> Option<i64> {
        if !state.is_enabled() || !self.can_increment() {
            return None;
        }
        let (lo, hi) = self.bounds();
        let next = clamp_i64(self.value().saturating_add(1), lo, hi);
        self.binding.set(next);
        tracing::trace!("stepper incremented to {}", next);
        Some(next)
    }

    /// Write value - 1, clamped. Nothing is written at the lower bound.
    pub fn decrement(&self, state: &ControlState) -> Option<i64> {
        if !state.is_enabled() || !self.can_decrement() {
            return None;
        }
        let (lo, hi) = self.bounds();
        let next = clamp_i64(self.value().saturating_sub(1), lo, hi);
        self.binding.set(next);
        tracing::trace!("stepper decremented to {}", next);
        Some(next)
    }

    /// Width of the value column (fits both bounds)
    pub fn value_width(&self) -> u16 {
        let (lo, hi) = self.bounds();
        lo.to_string().len().max(hi.to_string().len()) as u16
    }

    /// Rendered width: `[-] ` value ` [+]`
    pub fn width(&self) -> u16 {
        self.value_width() + 8
    }
}

/// Colors for the stepper control
#[derive(Debug, Clone, Copy)]
pub struct StepperColors {
    /// Button color
    pub button: Color,
    /// Value text
    pub value: Color,
    /// Focused button color
    pub focused: Color,
    /// Disabled color (also used for a button at its bound)
    pub disabled: Color,
}

impl Default for StepperColors {
    fn default() -> Self {
        Self {
            button: Color::Gray,
            value: Color::White,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl StepperColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            button: theme.secondary_fg,
            value: theme.text_fg,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperLayout {
    pub decrement_area: Rect,
    pub value_area: Rect,
    pub increment_area: Rect,
    pub full_area: Rect,
}

impl StepperLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }

    pub fn is_decrement(&self, x: u16, y: u16) -> bool {
        rect_contains(self.decrement_area, x, y)
    }

    pub fn is_increment(&self, x: u16, y: u16) -> bool {
        rect_contains(self.increment_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn make_stepper(initial: i64, range: RangeInclusive<i64>) -> (Rc<Cell<i64>>, Stepper) {
        let value = Rc::new(Cell::new(initial));
        (value.clone(), Stepper::new(Binding::from_cell(&value), range))
    }

    #[test]
    fn test_increment_and_decrement() {
        let (value, stepper) = make_stepper(5, 0..=10);
        let state = ControlState::default();
        assert_eq!(stepper.increment(&state), Some(6));
        assert_eq!(stepper.decrement(&state), Some(5));
        assert_eq!(stepper.decrement(&state), Some(4));
        assert_eq!(value.get(), 4);
    }

    #[test]
    fn test_bounds_write_nothing() {
        let (value, stepper) = make_stepper(10, 0..=10);
        let state = ControlState::default();
        assert!(!stepper.can_increment());
        assert_eq!(stepper.increment(&state), None);
        assert_eq!(value.get(), 10);

        value.set(0);
        assert!(!stepper.can_decrement());
        assert_eq!(stepper.decrement(&state), None);
    }

    #[test]
    fn test_out_of_range_value_steps_back_inside() {
        let (value, stepper) = make_stepper(50, 0..=10);
        let state = ControlState::default();
        assert!(!stepper.can_increment());
        assert_eq!(stepper.decrement(&state), Some(10));
        assert_eq!(value.get(), 10);
    }

    #[test]
    fn test_inverted_range_is_inert() {
        let (value, stepper) = make_stepper(3, 5..=1);
        let state = ControlState::default();
        assert_eq!(stepper.increment(&state), None);
        assert_eq!(stepper.decrement(&state), None);
        assert_eq!(value.get(), 3);
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let (value, stepper) = make_stepper(5, 0..=10);
        let state = ControlState::default().with_focus(FocusState::Disabled);
        assert_eq!(stepper.increment(&state), None);
        assert_eq!(value.get(), 5);
    }

    #[test]
    fn test_width_fits_bounds() {
        let (_value, stepper) = make_stepper(0, -100..=5);
        assert_eq!(stepper.value_width(), 4);
        assert_eq!(stepper.width(), 12);
    }
}
