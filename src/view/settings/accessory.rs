//! Trailing accessory of a settings row
//!
//! [`RowAccessory`] is the closed set of controls a row can host. Rendering
//! and input dispatch go through the exhaustive matches in this module, so
//! model rows, links and the DSL all share one mapping.

use std::ops::RangeInclusive;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::binding::Binding;
use crate::view::controls::{
    rect_contains, render_color_picker, render_palette, render_picker, render_picker_menu,
    render_slider, render_status, render_stepper, render_toggle, ColorPicker, ColorPickerColors,
    ColorPickerEvent, ColorPickerLayout, ControlState, FocusState, PaletteLayout, Picker,
    PickerColors, PickerEvent, PickerLayout, PickerMenuLayout, Slider, SliderColors, SliderEvent,
    SliderLayout, StatusColors, StatusKind, Stepper, StepperColors, StepperEvent, StepperLayout,
    Toggle, ToggleColors, ToggleEvent, ToggleLayout,
};
use crate::view::theme::SettingsTheme;

/// Glyph drawn for rows that navigate further
pub const CHEVRON: &str = "›";

/// The control hosted at the trailing edge of a row
#[derive(Debug, Clone)]
pub enum RowAccessory {
    None,
    Toggle(Toggle),
    Picker(Picker),
    ColorPicker(ColorPicker),
    Slider(Slider),
    Stepper(Stepper),
    Status(StatusKind),
}

/// Fieldless tag of a [`RowAccessory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessoryKind {
    None,
    Toggle,
    Picker,
    ColorPicker,
    Slider,
    Stepper,
    Status,
}

impl RowAccessory {
    pub fn toggle(binding: Binding<bool>) -> Self {
        Self::Toggle(Toggle::new(binding))
    }

    pub fn picker<I, S>(selection: Binding<usize>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Picker(Picker::new(
            selection,
            options.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn color_picker(binding: Binding<Color>) -> Self {
        Self::ColorPicker(ColorPicker::new(binding))
    }

    pub fn slider(binding: Binding<f64>, range: RangeInclusive<f64>) -> Self {
        Self::Slider(Slider::new(binding, range))
    }

    pub fn stepper(binding: Binding<i64>, range: RangeInclusive<i64>) -> Self {
        Self::Stepper(Stepper::new(binding, range))
    }

    pub fn status(kind: StatusKind) -> Self {
        Self::Status(kind)
    }

    pub fn kind(&self) -> AccessoryKind {
        match self {
            RowAccessory::None => AccessoryKind::None,
            RowAccessory::Toggle(_) => AccessoryKind::Toggle,
            RowAccessory::Picker(_) => AccessoryKind::Picker,
            RowAccessory::ColorPicker(_) => AccessoryKind::ColorPicker,
            RowAccessory::Slider(_) => AccessoryKind::Slider,
            RowAccessory::Stepper(_) => AccessoryKind::Stepper,
            RowAccessory::Status(_) => AccessoryKind::Status,
        }
    }

    /// Whether the accessory reacts to input at all
    pub fn is_interactive(&self) -> bool {
        !matches!(self, RowAccessory::None | RowAccessory::Status(_))
    }

    /// Cells taken at the trailing edge. The chevron only shows on rows
    /// without a control.
    pub fn width(&self, chevron: bool) -> u16 {
        match self {
            RowAccessory::None => u16::from(chevron),
            RowAccessory::Toggle(_) => Toggle::WIDTH,
            RowAccessory::Picker(picker) => picker.width(),
            RowAccessory::ColorPicker(_) => ColorPicker::WIDTH,
            RowAccessory::Slider(slider) => slider.width(),
            RowAccessory::Stepper(stepper) => stepper.width(),
            RowAccessory::Status(_) => StatusKind::WIDTH,
        }
    }

    /// Handle a mouse event. `layout` and `popup` come from the last frame.
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &AccessoryLayout,
        popup: &PopupLayout,
    ) -> Option<AccessoryEvent> {
        match self {
            RowAccessory::None | RowAccessory::Status(_) => None,
            RowAccessory::Toggle(toggle) => {
                let layout = match layout {
                    AccessoryLayout::Toggle(l) => *l,
                    _ => ToggleLayout::default(),
                };
                toggle
                    .handle_mouse(state, event, &layout)
                    .map(AccessoryEvent::Toggle)
            }
            RowAccessory::Picker(picker) => {
                let layout = match layout {
                    AccessoryLayout::Picker(l) => *l,
                    _ => PickerLayout::default(),
                };
                let menu = match popup {
                    PopupLayout::PickerMenu(menu) => Some(menu),
                    _ => None,
                };
                picker
                    .handle_mouse(state, event, &layout, menu)
                    .map(AccessoryEvent::Picker)
            }
            RowAccessory::ColorPicker(picker) => {
                let layout = match layout {
                    AccessoryLayout::ColorPicker(l) => *l,
                    _ => ColorPickerLayout::default(),
                };
                let palette = match popup {
                    PopupLayout::Palette(palette) => Some(palette),
                    _ => None,
                };
                picker
                    .handle_mouse(state, event, &layout, palette)
                    .map(AccessoryEvent::ColorPicker)
            }
            RowAccessory::Slider(slider) => {
                let layout = match layout {
                    AccessoryLayout::Slider(l) => *l,
                    _ => SliderLayout::default(),
                };
                slider
                    .handle_mouse(state, event, &layout)
                    .map(AccessoryEvent::Slider)
            }
            RowAccessory::Stepper(stepper) => {
                let layout = match layout {
                    AccessoryLayout::Stepper(l) => *l,
                    _ => StepperLayout::default(),
                };
                stepper
                    .handle_mouse(state, event, &layout)
                    .map(AccessoryEvent::Stepper)
            }
        }
    }

    /// Handle a key event (the row must be focused)
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<AccessoryEvent> {
        match self {
            RowAccessory::None | RowAccessory::Status(_) => None,
            RowAccessory::Toggle(toggle) => toggle.handle_key(state, key).map(AccessoryEvent::Toggle),
            RowAccessory::Picker(picker) => picker.handle_key(state, key).map(AccessoryEvent::Picker),
            RowAccessory::ColorPicker(picker) => picker
                .handle_key(state, key)
                .map(AccessoryEvent::ColorPicker),
            RowAccessory::Slider(slider) => slider.handle_key(state, key).map(AccessoryEvent::Slider),
            RowAccessory::Stepper(stepper) => {
                stepper.handle_key(state, key).map(AccessoryEvent::Stepper)
            }
        }
    }
}

/// Result of dispatching input to an accessory
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessoryEvent {
    Toggle(ToggleEvent),
    Picker(PickerEvent),
    ColorPicker(ColorPickerEvent),
    Slider(SliderEvent),
    Stepper(StepperEvent),
}

impl AccessoryEvent {
    /// Whether this event wrote through the accessory's binding
    pub fn wrote_value(&self) -> bool {
        matches!(
            self,
            AccessoryEvent::Toggle(ToggleEvent::Toggled(_))
                | AccessoryEvent::Picker(PickerEvent::Selected(_))
                | AccessoryEvent::ColorPicker(ColorPickerEvent::Picked(_))
                | AccessoryEvent::Slider(SliderEvent::Changed(_))
                | AccessoryEvent::Stepper(StepperEvent::Incremented(_))
                | AccessoryEvent::Stepper(StepperEvent::Decremented(_))
        )
    }
}

/// Colors for every accessory, derived from one theme
#[derive(Debug, Clone, Copy)]
pub struct AccessoryColors {
    pub chevron: Color,
    pub disabled: Color,
    pub toggle: ToggleColors,
    pub picker: PickerColors,
    pub color_picker: ColorPickerColors,
    pub slider: SliderColors,
    pub stepper: StepperColors,
    pub status: StatusColors,
}

impl AccessoryColors {
    pub fn from_theme(theme: &SettingsTheme) -> Self {
        Self {
            chevron: theme.secondary_fg,
            disabled: theme.disabled_fg,
            toggle: ToggleColors::from_theme(theme),
            picker: PickerColors::from_theme(theme),
            color_picker: ColorPickerColors::from_theme(theme),
            slider: SliderColors::from_theme(theme),
            stepper: StepperColors::from_theme(theme),
            status: StatusColors::from_theme(theme),
        }
    }
}

impl Default for AccessoryColors {
    fn default() -> Self {
        Self::from_theme(&SettingsTheme::default())
    }
}

/// Hit-test layout of whatever [`render_accessory`] drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessoryLayout {
    #[default]
    None,
    Chevron(Rect),
    Toggle(ToggleLayout),
    Picker(PickerLayout),
    ColorPicker(ColorPickerLayout),
    Slider(SliderLayout),
    Stepper(StepperLayout),
    Status(Rect),
}

impl AccessoryLayout {
    /// Tag of the accessory this layout was rendered for
    pub fn kind(&self) -> AccessoryKind {
        match self {
            AccessoryLayout::None | AccessoryLayout::Chevron(_) => AccessoryKind::None,
            AccessoryLayout::Toggle(_) => AccessoryKind::Toggle,
            AccessoryLayout::Picker(_) => AccessoryKind::Picker,
            AccessoryLayout::ColorPicker(_) => AccessoryKind::ColorPicker,
            AccessoryLayout::Slider(_) => AccessoryKind::Slider,
            AccessoryLayout::Stepper(_) => AccessoryKind::Stepper,
            AccessoryLayout::Status(_) => AccessoryKind::Status,
        }
    }

    pub fn has_chevron(&self) -> bool {
        matches!(self, AccessoryLayout::Chevron(_))
    }

    /// Area covered by the drawn control
    pub fn area(&self) -> Rect {
        match self {
            AccessoryLayout::None => Rect::default(),
            AccessoryLayout::Chevron(area) | AccessoryLayout::Status(area) => *area,
            AccessoryLayout::Toggle(l) => l.switch_area,
            AccessoryLayout::Picker(l) => l.button_area,
            AccessoryLayout::ColorPicker(l) => l.full_area,
            AccessoryLayout::Slider(l) => l.full_area,
            AccessoryLayout::Stepper(l) => l.full_area,
        }
    }
}

/// Layout of an open option menu or color palette
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopupLayout {
    #[default]
    None,
    PickerMenu(PickerMenuLayout),
    Palette(PaletteLayout),
}

impl PopupLayout {
    pub fn is_open(&self) -> bool {
        !matches!(self, PopupLayout::None)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        match self {
            PopupLayout::None => false,
            PopupLayout::PickerMenu(menu) => rect_contains(menu.area, x, y),
            PopupLayout::Palette(palette) => palette.contains(x, y),
        }
    }
}

/// Render the accessory right-aligned inside `area`
pub fn render_accessory(
    frame: &mut Frame,
    area: Rect,
    accessory: &RowAccessory,
    chevron: bool,
    state: &ControlState,
    colors: &AccessoryColors,
) -> AccessoryLayout {
    let width = accessory.width(chevron).min(area.width);
    let slot = Rect::new(area.right().saturating_sub(width), area.y, width, area.height.min(1));

    match accessory {
        RowAccessory::None => {
            if !chevron || slot.width == 0 || slot.height == 0 {
                return AccessoryLayout::None;
            }
            let color = if state.focus == FocusState::Disabled {
                colors.disabled
            } else {
                colors.chevron
            };
            frame.render_widget(
                Paragraph::new(CHEVRON).style(Style::default().fg(color)),
                slot,
            );
            AccessoryLayout::Chevron(slot)
        }
        RowAccessory::Toggle(toggle) => {
            AccessoryLayout::Toggle(render_toggle(frame, slot, toggle, state, &colors.toggle))
        }
        RowAccessory::Picker(picker) => {
            AccessoryLayout::Picker(render_picker(frame, slot, picker, state, &colors.picker))
        }
        RowAccessory::ColorPicker(picker) => AccessoryLayout::ColorPicker(render_color_picker(
            frame,
            slot,
            picker,
            state,
            &colors.color_picker,
        )),
        RowAccessory::Slider(slider) => {
            AccessoryLayout::Slider(render_slider(frame, slot, slider, state, &colors.slider))
        }
        RowAccessory::Stepper(stepper) => {
            AccessoryLayout::Stepper(render_stepper(frame, slot, stepper, state, &colors.stepper))
        }
        RowAccessory::Status(kind) => {
            AccessoryLayout::Status(render_status(frame, slot, *kind, &colors.status))
        }
    }
}

/// Render the popup of an open picker or color picker as an overlay.
///
/// `anchor` is the accessory layout from the same frame; `bounds` is the
/// region the popup must stay inside.
pub fn render_accessory_popup(
    frame: &mut Frame,
    anchor: &AccessoryLayout,
    bounds: Rect,
    accessory: &RowAccessory,
    state: &ControlState,
    colors: &AccessoryColors,
) -> PopupLayout {
    if !state.open {
        return PopupLayout::None;
    }
    match accessory {
        RowAccessory::Picker(picker) => PopupLayout::PickerMenu(render_picker_menu(
            frame,
            anchor.area(),
            bounds,
            picker,
            state,
            &colors.picker,
        )),
        RowAccessory::ColorPicker(picker) => PopupLayout::Palette(render_palette(
            frame,
            anchor.area(),
            bounds,
            picker,
            state,
            &colors.color_picker,
        )),
        _ => PopupLayout::None,
    }
}
