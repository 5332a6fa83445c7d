//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod controls;
pub mod icons;
pub mod scrollbar;
pub mod settings;
pub mod theme;

use crate::i18n::Localizer;
use theme::SettingsTheme;

/// Everything a render pass needs besides the frame and the data
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a SettingsTheme,
    pub localizer: &'a dyn Localizer,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a SettingsTheme, localizer: &'a dyn Localizer) -> Self {
        Self { theme, localizer }
    }

    /// Resolve a title key into display text
    pub fn text(&self, key: &str) -> String {
        self.localizer.localize(key)
    }
}
