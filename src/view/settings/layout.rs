//! Hit testing for mouse interaction with a settings page

use ratatui::layout::Rect;

use super::accessory::PopupLayout;
use super::row::RowLayout;
use crate::view::controls::rect_contains;

/// Layout of a rendered page, cached between frames
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Whole page area
    pub area: Rect,
    /// Visible rows, keyed by item index
    pub rows: Vec<(usize, RowLayout)>,
    /// Open option menu or palette, drawn over the rows
    pub popup: PopupLayout,
    /// Item owning the open popup
    pub popup_owner: Option<usize>,
    pub scrollbar_area: Option<Rect>,
}

/// Result of a hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHit {
    /// Inside the open popup of this item
    Popup(usize),
    /// On the row of this item
    Row(usize),
    Scrollbar,
    /// Inside the page but on a header, footer or gap
    Background,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }

    /// Layout of a visible item
    pub fn row(&self, item: usize) -> Option<&RowLayout> {
        self.rows
            .iter()
            .find(|(index, _)| *index == item)
            .map(|(_, layout)| layout)
    }

    /// Topmost thing under the given position
    pub fn hit_test(&self, x: u16, y: u16) -> Option<PageHit> {
        if let Some(owner) = self.popup_owner {
            if self.popup.contains(x, y) {
                return Some(PageHit::Popup(owner));
            }
        }
        if self.scrollbar_area.is_some_and(|area| rect_contains(area, x, y)) {
            return Some(PageHit::Scrollbar);
        }
        if let Some((index, _)) = self.rows.iter().find(|(_, layout)| layout.contains(x, y)) {
            return Some(PageHit::Row(*index));
        }
        rect_contains(self.area, x, y).then_some(PageHit::Background)
    }
}
