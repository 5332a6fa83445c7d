//! A scrollable page of sections with its own selection and popups

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use super::accessory::{render_accessory_popup, AccessoryColors, AccessoryEvent, PopupLayout};
use super::layout::{PageHit, PageLayout};
use super::link::{Destination, NavAction};
use super::row::{render_row, TextKey};
use super::section::{
    render_section_footer, render_section_header, SettingsItem, SettingsSectionView,
};
use crate::view::controls::{ControlState, FocusState};
use crate::view::scrollbar::{render_scrollbar, ScrollbarColors, ScrollbarState};
use crate::view::RenderContext;

/// Lines moved per mouse wheel notch
const SCROLL_LINES: isize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageLine {
    Header(usize),
    Item(usize),
    Footer(usize),
    Gap,
}

/// Sections laid out one line per header, item and footer.
///
/// Items are addressed by their position across all sections. The page
/// owns the per-item [`ControlState`], the keyboard selection and the
/// scroll offset; it also implements [`Destination`] so it can be pushed as
/// a nested screen.
#[derive(Debug)]
pub struct SettingsPage {
    title: TextKey,
    sections: Vec<SettingsSectionView>,
    lines: Vec<PageLine>,
    /// Section and position within it, per item
    items: Vec<(usize, usize)>,
    item_lines: Vec<usize>,
    states: Vec<ControlState>,
    selected: Option<usize>,
    hovered: Option<usize>,
    dragging: Option<usize>,
    scroll_offset: usize,
    /// Height of the last render, 0 before the first one
    viewport_height: usize,
    layout: PageLayout,
}

impl SettingsPage {
    pub fn new(
        title: impl Into<TextKey>,
        sections: impl IntoIterator<Item = SettingsSectionView>,
    ) -> Self {
        let sections: Vec<SettingsSectionView> = sections.into_iter().collect();
        let mut lines = Vec::new();
        let mut items = Vec::new();
        let mut item_lines = Vec::new();

        for (s, section) in sections.iter().enumerate() {
            if s > 0 {
                lines.push(PageLine::Gap);
            }
            if section.has_header() {
                lines.push(PageLine::Header(s));
            }
            for i in 0..section.items().len() {
                item_lines.push(lines.len());
                lines.push(PageLine::Item(items.len()));
                items.push((s, i));
            }
            if section.footer().is_some() {
                lines.push(PageLine::Footer(s));
            }
        }

        let mut page = Self {
            title: title.into(),
            states: vec![ControlState::default(); items.len()],
            sections,
            lines,
            items,
            item_lines,
            selected: None,
            hovered: None,
            dragging: None,
            scroll_offset: 0,
            viewport_height: 0,
            layout: PageLayout::default(),
        };
        page.selected = (0..page.items.len()).find(|&i| page.is_enabled(i));
        page.sync_focus();
        page
    }

    pub fn sections(&self) -> &[SettingsSectionView] {
        &self.sections
    }

    /// Number of items across all sections
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, index: usize) -> Option<&SettingsItem> {
        let (s, i) = *self.items.get(index)?;
        self.sections.get(s)?.items().get(i)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&SettingsItem> {
        self.selected.and_then(|index| self.item(index))
    }

    pub fn control_state(&self, index: usize) -> Option<&ControlState> {
        self.states.get(index)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Layout of the last render
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Item whose option menu or palette is open
    pub fn open_popup(&self) -> Option<usize> {
        self.states.iter().position(|state| state.open)
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.item(index).is_some_and(|item| !item.is_disabled())
    }

    /// Select an enabled item and scroll it into view
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_enabled(index) {
            return false;
        }
        if let Some(previous) = self.selected.filter(|&p| p != index) {
            self.states[previous].close_popup();
        }
        self.selected = Some(index);
        self.ensure_visible();
        self.sync_focus();
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.step_selection(1)
    }

    pub fn select_prev(&mut self) -> bool {
        self.step_selection(-1)
    }

    pub fn select_first(&mut self) -> bool {
        match (0..self.items.len()).find(|&i| self.is_enabled(i)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn select_last(&mut self) -> bool {
        match (0..self.items.len()).rev().find(|&i| self.is_enabled(i)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Move the selection by `delta` items, skipping disabled ones
    fn step_selection(&mut self, delta: isize) -> bool {
        let count = self.items.len();
        if count == 0 {
            return false;
        }
        let forward = delta >= 0;
        let start = match self.selected {
            Some(current) => current as isize + delta,
            None if forward => 0,
            None => count as isize - 1,
        };
        let target = start.clamp(0, count as isize - 1) as usize;

        let in_direction = if forward {
            (target..count).find(|&i| self.is_enabled(i))
        } else {
            (0..=target).rev().find(|&i| self.is_enabled(i))
        };
        // Nearest enabled item between the selection and the target
        let found = in_direction.or_else(|| match self.selected {
            Some(current) if forward => (current + 1..target).rev().find(|&i| self.is_enabled(i)),
            Some(current) => (target + 1..current).find(|&i| self.is_enabled(i)),
            None => None,
        });

        match found {
            Some(index) if Some(index) != self.selected => self.select(index),
            _ => false,
        }
    }

    fn page_step(&self) -> isize {
        self.viewport_height.max(1) as isize
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height.max(1))
    }

    /// Scroll by `delta` lines without moving the selection
    pub fn scroll_by(&mut self, delta: isize) {
        let offset = (self.scroll_offset as isize + delta).max(0) as usize;
        self.scroll_offset = offset.min(self.max_offset());
    }

    /// Keep the selected item (and its section header) on screen
    fn ensure_visible(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let height = self.viewport_height;
        if height == 0 {
            return;
        }
        let line = self.item_lines[selected];
        let top = match line.checked_sub(1).map(|l| self.lines[l]) {
            Some(PageLine::Header(_)) => line - 1,
            _ => line,
        };
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if line >= self.scroll_offset + height {
            self.scroll_offset = line + 1 - height;
        }
    }

    fn scroll_to_row(&mut self, y: u16) {
        let Some(bar) = self.layout.scrollbar_area else {
            return;
        };
        let state = ScrollbarState::new(self.lines.len(), self.viewport_height, self.scroll_offset);
        self.scroll_offset =
            state.offset_for_row(bar.height as usize, y.saturating_sub(bar.y) as usize);
    }

    /// Derive each item's focus from selection, hover and the disabled flag
    fn sync_focus(&mut self) {
        for index in 0..self.states.len() {
            let focus = if !self.is_enabled(index) {
                FocusState::Disabled
            } else if self.selected == Some(index) {
                FocusState::Focused
            } else if self.hovered == Some(index) {
                FocusState::Hovered
            } else {
                FocusState::Normal
            };
            self.states[index].focus = focus;
        }
    }

    fn dispatch_mouse(&mut self, index: usize, event: MouseEvent) -> Option<AccessoryEvent> {
        let (s, i) = *self.items.get(index)?;
        let row = self.sections[s].items()[i].row();
        let row_layout = self.layout.row(index).copied().unwrap_or_default();
        let closed = PopupLayout::None;
        let popup = if self.layout.popup_owner == Some(index) {
            &self.layout.popup
        } else {
            &closed
        };
        row.handle_mouse(&mut self.states[index], event, &row_layout, popup)
    }

    fn dispatch_key(&mut self, index: usize, key: KeyEvent) -> Option<AccessoryEvent> {
        let (s, i) = *self.items.get(index)?;
        let row = self.sections[s].items()[i].row();
        row.handle_key(&mut self.states[index], key)
    }

    fn link_destination(&self, index: usize) -> Option<Box<dyn Destination>> {
        self.item(index)
            .and_then(SettingsItem::as_link)
            .filter(|link| !link.row().is_disabled())
            .map(|link| link.destination())
    }

    fn render_page(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut layout = PageLayout::new(area);
        if area.width == 0 || area.height == 0 {
            self.layout = layout;
            return;
        }

        let height = area.height as usize;
        self.viewport_height = height;
        let scrollable = self.lines.len() > height && area.width > 1;
        let content = if scrollable {
            Rect::new(area.x, area.y, area.width - 1, area.height)
        } else {
            area
        };
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
        self.sync_focus();

        for (position, line) in self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(height)
        {
            let y = content.y + (position - self.scroll_offset) as u16;
            let line_area = Rect::new(content.x, y, content.width, 1);
            match *line {
                PageLine::Header(s) => render_section_header(frame, line_area, &self.sections[s], ctx),
                PageLine::Footer(s) => render_section_footer(frame, line_area, &self.sections[s], ctx),
                PageLine::Gap => {}
                PageLine::Item(index) => {
                    let (s, i) = self.items[index];
                    let row = self.sections[s].items()[i].row();
                    let row_layout = render_row(frame, line_area, row, &self.states[index], ctx);
                    layout.rows.push((index, row_layout));
                }
            }
        }

        if scrollable {
            let bar = Rect::new(area.right() - 1, area.y, 1, area.height);
            let state = ScrollbarState::new(self.lines.len(), height, self.scroll_offset);
            render_scrollbar(frame, bar, &state, &ScrollbarColors::from_theme(ctx.theme));
            layout.scrollbar_area = Some(bar);
        }

        // Popups go last so they draw over the rows below their anchor
        if let Some(owner) = self.open_popup() {
            match layout.row(owner).map(|row_layout| row_layout.accessory) {
                Some(anchor) => {
                    let (s, i) = self.items[owner];
                    let accessory = self.sections[s].items()[i].row().accessory();
                    layout.popup = render_accessory_popup(
                        frame,
                        &anchor,
                        area,
                        accessory,
                        &self.states[owner],
                        &AccessoryColors::from_theme(ctx.theme),
                    );
                    layout.popup_owner = Some(owner);
                }
                None => {
                    self.states[owner].close_popup();
                    tracing::debug!("closed popup of item {} scrolled out of view", owner);
                }
            }
        }

        self.layout = layout;
    }
}

impl Destination for SettingsPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        self.render_page(frame, area, ctx);
    }

    fn handle_key(&mut self, key: KeyEvent) -> NavAction {
        self.sync_focus();

        // An open popup captures the keyboard until it closes
        if let Some(owner) = self.open_popup() {
            self.dispatch_key(owner, key);
            return NavAction::Consumed;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                NavAction::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                NavAction::Consumed
            }
            KeyCode::PageUp => {
                self.step_selection(-self.page_step());
                NavAction::Consumed
            }
            KeyCode::PageDown => {
                self.step_selection(self.page_step());
                NavAction::Consumed
            }
            KeyCode::Home => {
                self.select_first();
                NavAction::Consumed
            }
            KeyCode::End => {
                self.select_last();
                NavAction::Consumed
            }
            KeyCode::Esc | KeyCode::Backspace => NavAction::Pop,
            _ => {
                let Some(index) = self.selected else {
                    return NavAction::Ignored;
                };
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    if let Some(destination) = self.link_destination(index) {
                        return NavAction::Push(destination);
                    }
                }
                match self.dispatch_key(index, key) {
                    Some(_) => NavAction::Consumed,
                    None => NavAction::Ignored,
                }
            }
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> NavAction {
        self.sync_focus();
        let (x, y) = (event.column, event.row);

        // An open popup captures the pointer: clicks elsewhere dismiss it
        if let Some(owner) = self.open_popup() {
            self.dispatch_mouse(owner, event);
            return NavAction::Consumed;
        }

        match event.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_by(-SCROLL_LINES);
                NavAction::Consumed
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(SCROLL_LINES);
                NavAction::Consumed
            }
            MouseEventKind::Moved => {
                let hovered = match self.layout.hit_test(x, y) {
                    Some(PageHit::Row(index)) if self.is_enabled(index) => Some(index),
                    _ => None,
                };
                if hovered == self.hovered {
                    return NavAction::Ignored;
                }
                self.hovered = hovered;
                self.sync_focus();
                NavAction::Consumed
            }
            MouseEventKind::Down(MouseButton::Left) => match self.layout.hit_test(x, y) {
                Some(PageHit::Row(index)) => {
                    if !self.select(index) {
                        return NavAction::Consumed;
                    }
                    if let Some(destination) = self.link_destination(index) {
                        return NavAction::Push(destination);
                    }
                    self.dispatch_mouse(index, event);
                    if self.states[index].dragging {
                        self.dragging = Some(index);
                    }
                    NavAction::Consumed
                }
                Some(PageHit::Scrollbar) => {
                    self.scroll_to_row(y);
                    NavAction::Consumed
                }
                Some(PageHit::Background) | Some(PageHit::Popup(_)) => NavAction::Consumed,
                None => NavAction::Ignored,
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(index) = self.dragging {
                    self.dispatch_mouse(index, event);
                    NavAction::Consumed
                } else if self.layout.hit_test(x, y) == Some(PageHit::Scrollbar) {
                    self.scroll_to_row(y);
                    NavAction::Consumed
                } else {
                    NavAction::Ignored
                }
            }
            MouseEventKind::Up(MouseButton::Left) => match self.dragging.take() {
                Some(index) => {
                    self.dispatch_mouse(index, event);
                    NavAction::Consumed
                }
                None => NavAction::Ignored,
            },
            _ => NavAction::Ignored,
        }
    }

    fn has_open_popup(&self) -> bool {
        self.open_popup().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use crate::i18n::VerbatimLocalizer;
    use crate::view::controls::test_support::{key, mouse, render_buffer, row_text};
    use crate::view::settings::link::SettingsLinkRow;
    use crate::view::settings::row::SettingsRowModel;
    use crate::view::settings::RowAccessory;
    use crate::view::theme::SettingsTheme;
    use ratatui::buffer::Buffer;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Fixture {
        wifi: Rc<Cell<bool>>,
        mode: Rc<Cell<usize>>,
        page: SettingsPage,
    }

    /// Lines: header, Wi-Fi, VPN (disabled), Mode, gap, header, About, footer
    fn fixture() -> Fixture {
        let wifi = Rc::new(Cell::new(false));
        let mode = Rc::new(Cell::new(0));
        let network = SettingsSectionView::rows(
            "Network",
            [
                SettingsRowModel::new("Wi-Fi")
                    .with_accessory(RowAccessory::toggle(Binding::from_cell(&wifi))),
                SettingsRowModel::new("VPN").with_disabled(true),
                SettingsRowModel::new("Mode").with_accessory(RowAccessory::picker(
                    Binding::from_cell(&mode),
                    ["Auto", "Manual", "Off"],
                )),
            ],
        );
        let more = SettingsSectionView::new(
            "More",
            [SettingsLinkRow::new("About", || {
                SettingsPage::new("about", Vec::<SettingsSectionView>::new())
            })],
        )
        .with_footer("Footer");
        Fixture {
            wifi,
            mode,
            page: SettingsPage::new("Settings", [network, more]),
        }
    }

    fn draw(page: &mut SettingsPage, width: u16, height: u16) -> Buffer {
        let theme = SettingsTheme::default();
        let localizer = VerbatimLocalizer;
        let ctx = RenderContext::new(&theme, &localizer);
        render_buffer(width, height, |frame, area| page.render(frame, area, &ctx))
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    #[test]
    fn test_lines_follow_section_order() {
        let mut f = fixture();
        let buffer = draw(&mut f.page, 30, 8);
        assert!(row_text(&buffer, 0).starts_with(" NETWORK"));
        assert!(row_text(&buffer, 1).starts_with(" Wi-Fi"));
        assert!(row_text(&buffer, 2).starts_with(" VPN"));
        assert!(row_text(&buffer, 3).starts_with(" Mode"));
        assert_eq!(row_text(&buffer, 4).trim(), "");
        assert!(row_text(&buffer, 5).starts_with(" MORE"));
        assert!(row_text(&buffer, 6).starts_with(" About"));
        assert!(row_text(&buffer, 6).ends_with("› "));
        assert!(row_text(&buffer, 7).starts_with(" Footer"));
    }

    #[test]
    fn test_keyboard_selection_skips_disabled_rows() {
        let mut f = fixture();
        assert_eq!(f.page.selected(), Some(0));
        f.page.handle_key(key(KeyCode::Down));
        assert_eq!(f.page.selected(), Some(2));
        f.page.handle_key(key(KeyCode::Char('j')));
        f.page.handle_key(key(KeyCode::Down));
        assert_eq!(f.page.selected(), Some(3));
        f.page.handle_key(key(KeyCode::Up));
        f.page.handle_key(key(KeyCode::Up));
        assert_eq!(f.page.selected(), Some(0));
        assert_eq!(
            f.page.control_state(1).map(|s| s.focus),
            Some(FocusState::Disabled)
        );
    }

    #[test]
    fn test_enter_toggles_selected_row_once() {
        let mut f = fixture();
        assert!(matches!(
            f.page.handle_key(key(KeyCode::Enter)),
            NavAction::Consumed
        ));
        assert!(f.wifi.get());
        f.page.handle_key(key(KeyCode::Char(' ')));
        assert!(!f.wifi.get());
    }

    #[test]
    fn test_picker_popup_captures_keys() {
        let mut f = fixture();
        f.page.select(2);
        f.page.handle_key(key(KeyCode::Enter));
        assert!(f.page.has_open_popup());

        // Down moves the menu highlight, not the page selection
        f.page.handle_key(key(KeyCode::Down));
        assert_eq!(f.page.selected(), Some(2));
        assert_eq!(f.mode.get(), 0);

        f.page.handle_key(key(KeyCode::Enter));
        assert_eq!(f.mode.get(), 1);
        assert!(!f.page.has_open_popup());
    }

    #[test]
    fn test_escape_pops_without_popup() {
        let mut f = fixture();
        assert!(matches!(f.page.handle_key(key(KeyCode::Esc)), NavAction::Pop));

        f.page.select(2);
        f.page.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            f.page.handle_key(key(KeyCode::Esc)),
            NavAction::Consumed
        ));
        assert!(!f.page.has_open_popup());
    }

    #[test]
    fn test_link_activation_pushes_destination() {
        let mut f = fixture();
        f.page.select_last();
        match f.page.handle_key(key(KeyCode::Enter)) {
            NavAction::Push(destination) => assert_eq!(destination.title(), "about"),
            other => panic!("expected push, got {:?}", other),
        }
    }

    #[test]
    fn test_mouse_click_dispatches_to_control() {
        let mut f = fixture();
        draw(&mut f.page, 30, 8);

        // Title click only selects
        f.page.handle_mouse(click(3, 3));
        assert_eq!(f.page.selected(), Some(2));
        assert!(!f.page.has_open_popup());

        // Toggle switch sits against the right padding: columns 26..29
        f.page.handle_mouse(click(27, 1));
        assert_eq!(f.page.selected(), Some(0));
        assert!(f.wifi.get());

        // Disabled rows ignore clicks
        f.page.handle_mouse(click(3, 2));
        assert_eq!(f.page.selected(), Some(0));

        assert!(matches!(f.page.handle_mouse(click(3, 6)), NavAction::Push(_)));
    }

    #[test]
    fn test_click_outside_open_menu_dismisses_it() {
        let mut f = fixture();
        f.page.select(2);
        f.page.handle_key(key(KeyCode::Enter));
        draw(&mut f.page, 30, 8);
        assert!(f.page.layout().popup.is_open());

        f.page.handle_mouse(click(0, 0));
        assert!(!f.page.has_open_popup());
        assert_eq!(f.mode.get(), 0);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut f = fixture();
        draw(&mut f.page, 30, 4);
        assert!(f.page.layout().scrollbar_area.is_some());

        f.page.handle_key(key(KeyCode::End));
        assert_eq!(f.page.scroll_offset(), 3);
        let buffer = draw(&mut f.page, 30, 4);
        assert!(row_text(&buffer, 3).starts_with(" About"));

        f.page.handle_key(key(KeyCode::Home));
        assert_eq!(f.page.scroll_offset(), 0);
    }

    #[test]
    fn test_wheel_scroll_is_clamped() {
        let mut f = fixture();
        draw(&mut f.page, 30, 4);
        f.page.handle_mouse(mouse(MouseEventKind::ScrollDown, 2, 2));
        assert_eq!(f.page.scroll_offset(), 3);
        f.page.handle_mouse(mouse(MouseEventKind::ScrollDown, 2, 2));
        assert_eq!(f.page.scroll_offset(), 4);
        f.page.handle_mouse(mouse(MouseEventKind::ScrollUp, 2, 2));
        f.page.handle_mouse(mouse(MouseEventKind::ScrollUp, 2, 2));
        assert_eq!(f.page.scroll_offset(), 0);
    }

    #[test]
    fn test_rendering_twice_is_stable() {
        let mut f = fixture();
        let first = draw(&mut f.page, 30, 8);
        let second = draw(&mut f.page, 30, 8);
        assert_eq!(first, second);
    }
}
