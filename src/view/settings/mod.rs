//! Settings screens
//!
//! A [`SettingsList`] hosts a root [`SettingsPage`] made of
//! [`SettingsSectionView`]s, each holding model rows and navigation links.
//! Pages own the per-row interaction state; rows only describe what to draw
//! and which [`Binding`](crate::binding::Binding) to write.

mod accessory;
pub mod dsl;
mod layout;
mod link;
mod list;
mod page;
mod row;
mod section;

pub use accessory::{
    render_accessory, render_accessory_popup, AccessoryColors, AccessoryEvent, AccessoryKind,
    AccessoryLayout, PopupLayout, RowAccessory, CHEVRON,
};
pub use layout::{PageHit, PageLayout};
pub use link::{Destination, NavAction, SettingsLinkRow};
pub use list::{DisplayMode, SettingsList, DEFAULT_TITLE};
pub use page::SettingsPage;
pub use row::{render_row, RowId, RowLayout, SettingsRowModel, TextKey};
pub use section::{render_section_footer, render_section_header, SettingsItem, SettingsSectionView};
