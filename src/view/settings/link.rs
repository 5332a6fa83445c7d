//! Navigation links and the destinations they open

use std::fmt;
use std::rc::Rc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use super::row::{SettingsRowModel, TextKey};
use crate::view::RenderContext;

/// A screen that can be pushed onto a [`SettingsList`](super::SettingsList)
/// navigation stack.
pub trait Destination {
    /// Localization key of the screen title
    fn title(&self) -> &str;

    /// Draw the screen into `area` and remember whatever hit testing needs
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext);

    fn handle_key(&mut self, key: KeyEvent) -> NavAction;

    fn handle_mouse(&mut self, event: MouseEvent) -> NavAction;

    /// Whether a popup on this screen is capturing input
    fn has_open_popup(&self) -> bool {
        false
    }
}

/// What a destination asks of the navigation stack after an event
pub enum NavAction {
    /// Not handled; the host may act on it
    Ignored,
    /// Handled, nothing else to do
    Consumed,
    /// Open this screen on top of the current one
    Push(Box<dyn Destination>),
    /// Return to the previous screen
    Pop,
}

impl NavAction {
    pub fn is_ignored(&self) -> bool {
        matches!(self, NavAction::Ignored)
    }
}

impl fmt::Debug for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::Ignored => write!(f, "Ignored"),
            NavAction::Consumed => write!(f, "Consumed"),
            NavAction::Push(destination) => write!(f, "Push({:?})", destination.title()),
            NavAction::Pop => write!(f, "Pop"),
        }
    }
}

type DestinationFactory = Rc<dyn Fn() -> Box<dyn Destination>>;

/// A row that opens a destination when activated.
///
/// The destination is built fresh by the factory on every activation; the
/// link keeps no state about it. Links always show a chevron.
#[derive(Clone)]
pub struct SettingsLinkRow {
    row: SettingsRowModel,
    factory: DestinationFactory,
}

impl SettingsLinkRow {
    pub fn new<D, F>(title: impl Into<TextKey>, destination: F) -> Self
    where
        D: Destination + 'static,
        F: Fn() -> D + 'static,
    {
        Self {
            row: SettingsRowModel::new(title).with_chevron(true),
            factory: Rc::new(move || Box::new(destination()) as Box<dyn Destination>),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.row = self.row.with_icon(icon);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.row = self.row.with_disabled(disabled);
        self
    }

    /// The row drawn for this link
    pub fn row(&self) -> &SettingsRowModel {
        &self.row
    }

    pub fn title(&self) -> &str {
        self.row.title()
    }

    /// Build the destination screen
    pub fn destination(&self) -> Box<dyn Destination> {
        (self.factory)()
    }
}

impl fmt::Debug for SettingsLinkRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsLinkRow")
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::settings::accessory::AccessoryKind;
    use std::cell::Cell;

    struct Blank(&'static str);

    impl Destination for Blank {
        fn title(&self) -> &str {
            self.0
        }
        fn render(&mut self, _frame: &mut Frame, _area: Rect, _ctx: &RenderContext) {}
        fn handle_key(&mut self, _key: KeyEvent) -> NavAction {
            NavAction::Ignored
        }
        fn handle_mouse(&mut self, _event: MouseEvent) -> NavAction {
            NavAction::Ignored
        }
    }

    #[test]
    fn test_link_row_has_chevron_and_no_control() {
        let link = SettingsLinkRow::new("General", || Blank("general")).with_icon("⚙");
        assert!(link.row().chevron());
        assert_eq!(link.row().icon(), Some("⚙"));
        assert_eq!(link.row().accessory().kind(), AccessoryKind::None);
    }

    #[test]
    fn test_factory_builds_fresh_destination_each_time() {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();
        let link = SettingsLinkRow::new("About", move || {
            counter.set(counter.get() + 1);
            Blank("about")
        });
        assert_eq!(built.get(), 0);
        assert_eq!(link.destination().title(), "about");
        assert_eq!(link.destination().title(), "about");
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_nav_action_debug() {
        let push = NavAction::Push(Box::new(Blank("display")));
        assert_eq!(format!("{:?}", push), "Push(\"display\")");
        assert!(NavAction::Ignored.is_ignored());
    }
}
