//! Declarative settings-screen components for terminal UIs
//!
//! Rows, accessory controls (toggle, picker, color picker, slider, stepper,
//! status glyph), titled sections and a navigable list, rendered with
//! ratatui and driven by crossterm events. Values are never owned by the
//! components: every interactive control reads and writes caller state
//! through a [`Binding`].
//!
//! ```ignore
//! use settings_kit::prelude::*;
//!
//! let wifi = Rc::new(Cell::new(true));
//! let mut list = dsl::list("settings.title", DisplayMode::Compact, [
//!     dsl::section("demo.general", [
//!         dsl::toggle("demo.wifi", Some("≋"), Binding::from_cell(&wifi)),
//!     ]),
//! ]);
//! terminal.draw(|frame| list.render(frame, frame.area()))?;
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod binding;
pub mod i18n;
#[cfg(feature = "runtime")]
pub mod services;
pub mod view;

pub use binding::Binding;

/// Commonly used types and the DSL module
pub mod prelude {
    pub use crate::binding::Binding;
    pub use crate::i18n::{BundledLocalizer, Localizer};
    pub use crate::view::controls::{FocusState, StatusKind};
    pub use crate::view::settings::dsl;
    pub use crate::view::settings::{
        Destination, DisplayMode, NavAction, RowAccessory, SettingsItem, SettingsLinkRow,
        SettingsList, SettingsPage, SettingsRowModel, SettingsSectionView,
    };
    pub use crate::view::theme::SettingsTheme;
    pub use std::cell::Cell;
    pub use std::rc::Rc;
}
