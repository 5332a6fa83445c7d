//! Color picker control for color bindings
//!
//! Renders as: `██ #0A84FF`; activating it opens a palette of swatches
//! drawn as an overlay.
//!
//! This module provides a complete color picker component with:
//! - Value access through a `Binding<Color>` (`ColorPicker`)
//! - Rendering (`render_color_picker`, `render_palette`)
//! - Input handling (`ColorPicker::handle_mouse`, `handle_key`)
//! - Layout/hit testing (`ColorPickerLayout`, `PaletteLayout`)

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::ColorPickerEvent;
pub use render::{render_color_picker, render_palette};

use super::{rect_contains, ControlState, FocusState};
use crate::binding::Binding;
use crate::view::theme::SettingsTheme;

/// Swatches offered when no palette is given
pub const DEFAULT_PALETTE: [Color; 16] = [
    Color::Rgb(255, 59, 48),
    Color::Rgb(255, 149, 0),
    Color::Rgb(255, 204, 0),
    Color::Rgb(52, 199, 89),
    Color::Rgb(0, 199, 190),
    Color::Rgb(48, 176, 199),
    Color::Rgb(50, 173, 230),
    Color::Rgb(0, 122, 255),
    Color::Rgb(88, 86, 214),
    Color::Rgb(175, 82, 222),
    Color::Rgb(255, 45, 85),
    Color::Rgb(162, 132, 94),
    Color::Rgb(255, 255, 255),
    Color::Rgb(199, 199, 204),
    Color::Rgb(142, 142, 147),
    Color::Rgb(0, 0, 0),
];

/// Width of the hex label
const LABEL_WIDTH: usize = 7;

/// A color selector bound to caller state
#[derive(Debug, Clone)]
pub struct ColorPicker {
    pub binding: Binding<Color>,
    /// Swatches offered in the palette
    pub palette: Vec<Color>,
}

impl ColorPicker {
    /// Rendered width of the closed control: swatch, space, label
    pub const WIDTH: u16 = 2 + 1 + LABEL_WIDTH as u16;
    /// Cells per swatch in the palette
    pub const SWATCH_WIDTH: u16 = 4;

    pub fn new(binding: Binding<Color>) -> Self {
        Self {
            binding,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Replace the offered swatches
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Current bound color
    pub fn color(&self) -> Color {
        self.binding.get()
    }

    /// Palette index of the bound color, if it is one of the swatches
    pub fn palette_index(&self) -> Option<usize> {
        let current = self.color();
        self.palette.iter().position(|c| *c == current)
    }

    /// Open the palette, highlighting the bound color
    pub fn open(&self, state: &mut ControlState) -> bool {
        if !state.is_enabled() || self.palette.is_empty() || state.open {
            return false;
        }
        state.open = true;
        state.highlighted = Some(self.palette_index().unwrap_or(0));
        tracing::debug!("color palette opened");
        true
    }

    /// Close the palette without writing
    pub fn cancel(&self, state: &mut ControlState) {
        state.close_popup();
    }

    /// Write the swatch at `index` and close the palette
    pub fn select(&self, state: &mut ControlState, index: usize) -> Option<Color> {
        if !state.is_enabled() {
            return None;
        }
        let color = *self.palette.get(index)?;
        self.binding.set(color);
        state.close_popup();
        tracing::trace!("color set to {}", hex_label(color));
        Some(color)
    }

    /// Commit the highlighted swatch
    pub fn confirm(&self, state: &mut ControlState) -> Option<Color> {
        let index = state.highlighted?;
        self.select(state, index)
    }

    /// Move the highlight by `delta` swatches, wrapping around
    pub fn move_highlight(&self, state: &mut ControlState, delta: isize) {
        let len = self.palette.len() as isize;
        if len == 0 {
            return;
        }
        let current = state.highlighted.unwrap_or(0) as isize;
        state.highlighted = Some((current + delta).rem_euclid(len) as usize);
    }
}

/// Text shown next to the swatch: `#RRGGBB` for RGB colors
pub fn hex_label(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        Color::Indexed(i) => format!("idx {}", i),
        other => {
            let name = format!("{:?}", other);
            name.chars().take(LABEL_WIDTH).collect()
        }
    }
}

/// Colors for the color picker control
#[derive(Debug, Clone, Copy)]
pub struct ColorPickerColors {
    /// Hex label color
    pub label: Color,
    /// Palette border
    pub border: Color,
    /// Palette background
    pub popup_bg: Color,
    /// Highlight brackets and focused label
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for ColorPickerColors {
    fn default() -> Self {
        Self {
            label: Color::Gray,
            border: Color::DarkGray,
            popup_bg: Color::Black,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl ColorPickerColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            label: theme.secondary_fg,
            border: theme.border_fg,
            popup_bg: theme.popup_bg,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout of the closed control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPickerLayout {
    pub swatch_area: Rect,
    pub full_area: Rect,
}

impl ColorPickerLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }
}

/// Layout of the open palette
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteLayout {
    /// Whole palette including border
    pub area: Rect,
    /// Area of each swatch, in palette order
    pub swatch_areas: Vec<Rect>,
}

impl PaletteLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.area, x, y)
    }

    /// Swatch under the given position
    pub fn swatch_at(&self, x: u16, y: u16) -> Option<usize> {
        self.swatch_areas
            .iter()
            .position(|area| rect_contains(*area, x, y))
    }
}
