//! Free-function constructors for settings screens
//!
//! Each row function takes a title key, an optional icon and whatever the
//! control needs, and returns a [`SettingsItem`] ready to place in a
//! [`section`]. The rows are ordinary [`SettingsRowModel`]s, so they draw
//! and react exactly like rows built by hand.
//!
//! ```ignore
//! use settings_kit::prelude::*;
//!
//! let volume = Rc::new(Cell::new(40.0));
//! let list = dsl::list("Sound", DisplayMode::Regular, [
//!     dsl::section("Output", [
//!         dsl::slider("Volume", Some("♪"), Binding::from_cell(&volume), 0.0..=100.0),
//!         dsl::status("Headphones", None, StatusKind::Checkmark),
//!     ]),
//! ]);
//! ```

use std::ops::RangeInclusive;

use ratatui::style::Color;

use super::accessory::RowAccessory;
use super::link::{Destination, SettingsLinkRow};
use super::list::{DisplayMode, SettingsList};
use super::page::SettingsPage;
use super::row::{SettingsRowModel, TextKey};
use super::section::{SettingsItem, SettingsSectionView};
use crate::binding::Binding;
use crate::view::controls::StatusKind;

fn base(title: impl Into<TextKey>, icon: Option<&str>) -> SettingsRowModel {
    let row = SettingsRowModel::new(title);
    match icon {
        Some(icon) => row.with_icon(icon),
        None => row,
    }
}

fn accessory_row(
    title: impl Into<TextKey>,
    icon: Option<&str>,
    accessory: RowAccessory,
) -> SettingsItem {
    base(title, icon).with_accessory(accessory).into()
}

/// On/off switch bound to `is_on`
pub fn toggle(title: impl Into<TextKey>, icon: Option<&str>, is_on: Binding<bool>) -> SettingsItem {
    accessory_row(title, icon, RowAccessory::toggle(is_on))
}

/// Menu of `options`; `selection` holds the chosen index
pub fn picker<I, S>(
    title: impl Into<TextKey>,
    icon: Option<&str>,
    selection: Binding<usize>,
    options: I,
) -> SettingsItem
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    accessory_row(title, icon, RowAccessory::picker(selection, options))
}

pub fn color_picker(
    title: impl Into<TextKey>,
    icon: Option<&str>,
    color: Binding<Color>,
) -> SettingsItem {
    accessory_row(title, icon, RowAccessory::color_picker(color))
}

/// Continuous value within `range`
pub fn slider(
    title: impl Into<TextKey>,
    icon: Option<&str>,
    value: Binding<f64>,
    range: RangeInclusive<f64>,
) -> SettingsItem {
    accessory_row(title, icon, RowAccessory::slider(value, range))
}

/// Integer value stepped by one within `range`
pub fn stepper(
    title: impl Into<TextKey>,
    icon: Option<&str>,
    value: Binding<i64>,
    range: RangeInclusive<i64>,
) -> SettingsItem {
    accessory_row(title, icon, RowAccessory::stepper(value, range))
}

/// Read-only status glyph
pub fn status(title: impl Into<TextKey>, icon: Option<&str>, kind: StatusKind) -> SettingsItem {
    accessory_row(title, icon, RowAccessory::status(kind))
}

/// Plain row without a control
pub fn row(title: impl Into<TextKey>, icon: Option<&str>, chevron: bool) -> SettingsItem {
    base(title, icon).with_chevron(chevron).into()
}

/// Row that opens the screen built by `destination`
pub fn link<D, F>(title: impl Into<TextKey>, icon: Option<&str>, destination: F) -> SettingsItem
where
    D: Destination + 'static,
    F: Fn() -> D + 'static,
{
    let link = SettingsLinkRow::new(title, destination);
    match icon {
        Some(icon) => link.with_icon(icon),
        None => link,
    }
    .into()
}

pub fn section<I>(title: impl Into<TextKey>, items: I) -> SettingsSectionView
where
    I: IntoIterator,
    I::Item: Into<SettingsItem>,
{
    SettingsSectionView::new(title, items)
}

/// Page usable as a [`link`] destination
pub fn page(
    title: impl Into<TextKey>,
    sections: impl IntoIterator<Item = SettingsSectionView>,
) -> SettingsPage {
    SettingsPage::new(title, sections)
}

pub fn list(
    title: impl Into<TextKey>,
    display_mode: DisplayMode,
    sections: impl IntoIterator<Item = SettingsSectionView>,
) -> SettingsList {
    SettingsList::new(sections)
        .with_title(title)
        .with_display_mode(display_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::settings::AccessoryKind;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_row_functions_map_to_accessories() {
        let items = [
            toggle("A", None, Binding::constant(true)),
            picker("B", None, Binding::constant(0), ["x", "y"]),
            color_picker("C", None, Binding::constant(Color::Red)),
            slider("D", None, Binding::constant(0.5), 0.0..=1.0),
            stepper("E", None, Binding::constant(3), 0..=10),
            status("F", None, StatusKind::Warning),
            row("G", None, false),
        ];
        let kinds: Vec<AccessoryKind> = items.iter().map(SettingsItem::accessory_kind).collect();
        assert_eq!(
            kinds,
            [
                AccessoryKind::Toggle,
                AccessoryKind::Picker,
                AccessoryKind::ColorPicker,
                AccessoryKind::Slider,
                AccessoryKind::Stepper,
                AccessoryKind::Status,
                AccessoryKind::None,
            ]
        );
    }

    #[test]
    fn test_icon_and_chevron() {
        let with_icon = row("Row", Some("★"), true);
        assert_eq!(with_icon.row().icon(), Some("★"));
        assert!(with_icon.row().chevron());
        assert_eq!(status("S", None, StatusKind::Checkmark).row().icon(), None);
    }

    #[test]
    fn test_link_builds_destination_lazily() {
        let built = Rc::new(Cell::new(false));
        let flag = built.clone();
        let item = link("About", Some("ℹ"), move || {
            flag.set(true);
            page("About", [section("", [row("Version", None, false)])])
        });
        assert!(!built.get());
        let link = item.as_link().map(|link| link.destination());
        assert!(built.get());
        assert_eq!(link.map(|d| d.title().to_string()).as_deref(), Some("About"));
        assert!(item.row().chevron());
    }

    #[test]
    fn test_list_takes_title_and_mode() {
        let list = list("Test", DisplayMode::Regular, [section("S", [row("R", None, false)])]);
        assert_eq!(list.navigation_title(), "Test");
        assert_eq!(list.display_mode(), DisplayMode::Regular);
        assert_eq!(list.root().item_count(), 1);
    }
}
