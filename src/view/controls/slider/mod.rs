//! Slider control for floating-point bindings
//!
//! Renders as: `━━━━━●───── 0.45`
//!
//! This module provides a complete slider component with:
//! - Value access through a `Binding<f64>` constrained to a closed range (`Slider`)
//! - Rendering (`render_slider`)
//! - Input handling with continuous drag (`Slider::handle_mouse`, `handle_key`)
//! - Layout/hit testing (`SliderLayout`)

mod input;
mod render;

use std::ops::RangeInclusive;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::SliderEvent;
pub use render::render_slider;

use super::{rect_contains, ControlState, FocusState};
use crate::binding::Binding;
use crate::view::theme::SettingsTheme;

/// Keyboard steps across the whole range
const KEY_STEPS: f64 = 20.0;

/// A continuous control over a closed interval
#[derive(Debug, Clone)]
pub struct Slider {
    pub binding: Binding<f64>,
    pub range: RangeInclusive<f64>,
    /// Track length in cells
    pub track_width: u16,
}

impl Slider {
    pub const DEFAULT_TRACK_WIDTH: u16 = 12;

    pub fn new(binding: Binding<f64>, range: RangeInclusive<f64>) -> Self {
        Self {
            binding,
            range,
            track_width: Self::DEFAULT_TRACK_WIDTH,
        }
    }

    pub fn with_track_width(mut self, width: u16) -> Self {
        self.track_width = width.max(2);
        self
    }

    fn bounds(&self) -> (f64, f64) {
        (*self.range.start(), *self.range.end())
    }

    /// Whether the range collapses to a single value
    pub fn is_degenerate(&self) -> bool {
        let (lo, hi) = self.bounds();
        !(hi > lo)
    }

    /// Clamp `value` into the range; a degenerate range yields its lower bound
    pub fn clamp(&self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        if self.is_degenerate() || value.is_nan() {
            return lo;
        }
        value.max(lo).min(hi)
    }

    /// Position of the bound value within the range, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        let (lo, hi) = self.bounds();
        if self.is_degenerate() {
            return 0.0;
        }
        let fraction = (self.binding.get() - lo) / (hi - lo);
        if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        }
    }

    /// Value at `fraction` of the range
    pub fn value_at(&self, fraction: f64) -> f64 {
        let (lo, hi) = self.bounds();
        self.clamp(lo + (hi - lo) * fraction)
    }

    /// Keyboard increment
    pub fn step(&self) -> f64 {
        let (lo, hi) = self.bounds();
        if self.is_degenerate() {
            0.0
        } else {
            (hi - lo) / KEY_STEPS
        }
    }

    /// Write `value` (clamped) through the binding
    pub fn set_value(&self, state: &ControlState, value: f64) -> Option<f64> {
        if !state.is_enabled() {
            return None;
        }
        let value = self.clamp(value);
        self.binding.set(value);
        tracing::trace!("slider set to {}", value);
        Some(value)
    }

    /// Move one keyboard step up
    pub fn increase(&self, state: &ControlState) -> Option<f64> {
        self.set_value(state, self.clamp(self.binding.get()) + self.step())
    }

    /// Move one keyboard step down
    pub fn decrease(&self, state: &ControlState) -> Option<f64> {
        self.set_value(state, self.clamp(self.binding.get()) - self.step())
    }

    /// Decimal places used for the value label
    fn precision(&self) -> usize {
        let (lo, hi) = self.bounds();
        if (hi - lo).abs() >= 10.0 {
            0
        } else {
            2
        }
    }

    /// Value label for `value`
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision(), value)
    }

    /// Width of the value label (fits both bounds)
    pub fn label_width(&self) -> u16 {
        let (lo, hi) = self.bounds();
        self.format_value(lo)
            .len()
            .max(self.format_value(hi).len()) as u16
    }

    /// Rendered width: track, space, label
    pub fn width(&self) -> u16 {
        self.track_width + 1 + self.label_width()
    }
}

/// Colors for the slider control
#[derive(Debug, Clone, Copy)]
pub struct SliderColors {
    /// Track left of the knob
    pub filled: Color,
    /// Track right of the knob
    pub track: Color,
    /// Knob color
    pub knob: Color,
    /// Value label
    pub label: Color,
    /// Focused knob color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            filled: Color::Cyan,
            track: Color::DarkGray,
            knob: Color::White,
            label: Color::Gray,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl SliderColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            filled: theme.icon_fg,
            track: theme.border_fg,
            knob: theme.text_fg,
            label: theme.secondary_fg,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderLayout {
    pub track_area: Rect,
    pub full_area: Rect,
}

impl SliderLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }

    /// Whether (x, y) is on the track itself, not the value label
    pub fn track_contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.track_area, x, y)
    }

    /// Fraction of the track at column `x`, clamped to the track
    pub fn fraction_at(&self, x: u16) -> f64 {
        let track = self.track_area;
        if track.width <= 1 {
            return 0.0;
        }
        let offset = x.saturating_sub(track.x).min(track.width - 1);
        offset as f64 / (track.width - 1) as f64
    }
}
