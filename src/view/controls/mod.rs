//! Accessory controls hosted at the trailing edge of a settings row
//!
//! Each control follows the same shape:
//! - a value type holding the [`Binding`](crate::Binding) and its
//!   configuration (`Toggle`, `Picker`, ...)
//! - a `*Colors` struct built from the [`SettingsTheme`]
//! - a `render_*` function returning a `*Layout` for hit testing
//! - `handle_mouse` / `handle_key` methods that write through the binding
//!
//! Per-row interaction state (focus, open popups, drags) lives in
//! [`ControlState`], which the owning page keeps between frames.
//!
//! [`SettingsTheme`]: crate::view::theme::SettingsTheme

pub mod color_picker;
pub mod picker;
pub mod slider;
pub mod status;
pub mod stepper;
pub mod toggle;

use ratatui::layout::Rect;

pub use color_picker::{
    hex_label, render_color_picker, render_palette, ColorPicker, ColorPickerColors,
    ColorPickerEvent, ColorPickerLayout, PaletteLayout, DEFAULT_PALETTE,
};
pub use picker::{
    render_picker, render_picker_menu, Picker, PickerColors, PickerEvent, PickerLayout,
    PickerMenuLayout,
};
pub use slider::{render_slider, Slider, SliderColors, SliderEvent, SliderLayout};
pub use status::{render_status, StatusColors, StatusKind};
pub use stepper::{render_stepper, Stepper, StepperColors, StepperEvent, StepperLayout};
pub use toggle::{render_toggle, Toggle, ToggleColors, ToggleEvent, ToggleLayout};

/// Focus state of a row and its control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
    Hovered,
    Disabled,
}

/// Interaction state a page keeps per row between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub focus: FocusState,
    /// Option menu or color palette is showing
    pub open: bool,
    /// Highlighted entry while a popup is open
    pub highlighted: Option<usize>,
    /// First visible entry of a scrolled option menu
    pub scroll_offset: usize,
    /// A slider drag is in progress
    pub dragging: bool,
}

impl ControlState {
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the control accepts input
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Close any popup without committing
    pub fn close_popup(&mut self) {
        self.open = false;
        self.highlighted = None;
        self.scroll_offset = 0;
    }

    /// Move between Normal and Hovered for pointer motion.
    ///
    /// Returns `Some(true)` on enter, `Some(false)` on leave, `None` when
    /// nothing changed. Focused and disabled controls keep their state.
    pub(crate) fn track_hover(&mut self, inside: bool) -> Option<bool> {
        if inside {
            if self.focus == FocusState::Normal {
                self.focus = FocusState::Hovered;
            }
            Some(true)
        } else if self.focus == FocusState::Hovered {
            self.focus = FocusState::Normal;
            Some(false)
        } else {
            None
        }
    }
}

/// Point-in-rect test shared by the layouts
pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Clamp without panicking on inverted bounds (inverted collapses to `lo`)
pub(crate) fn clamp_i64(value: i64, lo: i64, hi: i64) -> i64 {
    if hi < lo {
        lo
    } else {
        value.max(lo).min(hi)
    }
}
