//! Picker (menu-style selector) control for index bindings
//!
//! Renders as: `[Selected Option ▼]`, with the option menu drawn as an
//! overlay below (or above) the button while open.
//!
//! This module provides a complete picker component with:
//! - Selection through a `Binding<usize>` (`Picker`)
//! - Rendering (`render_picker`, `render_picker_menu`)
//! - Input handling (`Picker::handle_mouse`, `handle_key`)
//! - Layout/hit testing (`PickerLayout`, `PickerMenuLayout`)

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::PickerEvent;
pub use render::{render_picker, render_picker_menu};

use super::{rect_contains, ControlState, FocusState};
use crate::binding::Binding;
use crate::view::icons::display_width;
use crate::view::theme::SettingsTheme;

/// Longest option label shown on the button
const MAX_LABEL_WIDTH: usize = 20;

/// A selector among display strings, writing the chosen index
#[derive(Debug, Clone)]
pub struct Picker {
    /// Index of the chosen option
    pub selection: Binding<usize>,
    /// Display strings, in menu order
    pub options: Vec<String>,
}

impl Picker {
    /// Options shown at once in the open menu
    pub const MAX_VISIBLE: usize = 8;

    pub fn new(selection: Binding<usize>, options: Vec<String>) -> Self {
        Self { selection, options }
    }

    /// Bound index, if it names an option
    pub fn selected_index(&self) -> Option<usize> {
        let index = self.selection.get();
        (index < self.options.len()).then_some(index)
    }

    /// Display string of the bound option
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_index().map(|i| self.options[i].as_str())
    }

    /// Width of the label slot on the button
    pub fn label_width(&self) -> usize {
        self.options
            .iter()
            .map(|o| display_width(o))
            .max()
            .unwrap_or(0)
            .clamp(1, MAX_LABEL_WIDTH)
    }

    /// Rendered width of the closed picker: `[` label ` ▼]`
    pub fn width(&self) -> u16 {
        self.label_width() as u16 + 4
    }

    /// Open the menu, highlighting the bound option
    pub fn open(&self, state: &mut ControlState) -> bool {
        if !state.is_enabled() || self.options.is_empty() || state.open {
            return false;
        }
        state.open = true;
        state.highlighted = Some(self.selected_index().unwrap_or(0));
        self.ensure_visible(state);
        tracing::debug!("picker opened with {} options", self.options.len());
        true
    }

    /// Close the menu without writing
    pub fn cancel(&self, state: &mut ControlState) {
        state.close_popup();
    }

    /// Write `index` through the binding and close the menu
    pub fn select(&self, state: &mut ControlState, index: usize) -> Option<usize> {
        if !state.is_enabled() || index >= self.options.len() {
            return None;
        }
        self.selection.set(index);
        state.close_popup();
        tracing::trace!("picker selected {}", index);
        Some(index)
    }

    /// Commit the highlighted option
    pub fn confirm(&self, state: &mut ControlState) -> Option<usize> {
        let index = state.highlighted?;
        self.select(state, index)
    }

    /// Move the highlight down, wrapping at the end
    pub fn highlight_next(&self, state: &mut ControlState) {
        if self.options.is_empty() {
            return;
        }
        let next = match state.highlighted {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        state.highlighted = Some(next);
        self.ensure_visible(state);
    }

    /// Move the highlight up, wrapping at the start
    pub fn highlight_prev(&self, state: &mut ControlState) {
        if self.options.is_empty() {
            return;
        }
        let prev = match state.highlighted {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        };
        state.highlighted = Some(prev);
        self.ensure_visible(state);
    }

    /// Scroll the menu so the highlight is visible
    pub fn ensure_visible(&self, state: &mut ControlState) {
        let Some(highlighted) = state.highlighted else {
            return;
        };
        if self.options.len() <= Self::MAX_VISIBLE {
            state.scroll_offset = 0;
        } else if highlighted < state.scroll_offset {
            state.scroll_offset = highlighted;
        } else if highlighted >= state.scroll_offset + Self::MAX_VISIBLE {
            state.scroll_offset = highlighted + 1 - Self::MAX_VISIBLE;
        }
    }

    /// Scroll the open menu by `delta` options
    pub fn scroll_by(&self, state: &mut ControlState, delta: i32) {
        let max_offset = self.options.len().saturating_sub(Self::MAX_VISIBLE);
        if delta > 0 {
            state.scroll_offset = (state.scroll_offset + delta as usize).min(max_offset);
        } else {
            state.scroll_offset = state.scroll_offset.saturating_sub(delta.unsigned_abs() as usize);
        }
    }
}

/// Colors for the picker control
#[derive(Debug, Clone, Copy)]
pub struct PickerColors {
    /// Selected option text on the button
    pub selected: Color,
    /// Bracket color
    pub border: Color,
    /// Arrow indicator color
    pub arrow: Color,
    /// Option text in the menu
    pub option: Color,
    /// Highlighted option background
    pub highlight_bg: Color,
    /// Menu background
    pub menu_bg: Color,
    /// Focused color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for PickerColors {
    fn default() -> Self {
        Self {
            selected: Color::White,
            border: Color::Gray,
            arrow: Color::Gray,
            option: Color::White,
            highlight_bg: Color::Blue,
            menu_bg: Color::Black,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl PickerColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            selected: theme.text_fg,
            border: theme.secondary_fg,
            arrow: theme.secondary_fg,
            option: theme.text_fg,
            highlight_bg: theme.selection_bg,
            menu_bg: theme.popup_bg,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout of the closed picker button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerLayout {
    pub button_area: Rect,
}

impl PickerLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.button_area, x, y)
    }
}

/// Layout of the open option menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerMenuLayout {
    /// Whole menu area
    pub area: Rect,
    /// (option index, row area) for each visible option
    pub option_areas: Vec<(usize, Rect)>,
}

impl PickerMenuLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.area, x, y)
    }

    /// Option under the given position
    pub fn option_at(&self, x: u16, y: u16) -> Option<usize> {
        self.option_areas
            .iter()
            .find(|(_, area)| rect_contains(*area, x, y))
            .map(|(index, _)| *index)
    }
}
