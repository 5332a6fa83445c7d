//! Row model and the row renderer shared by every row-like item

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::accessory::{
    render_accessory, AccessoryColors, AccessoryEvent, AccessoryLayout, PopupLayout, RowAccessory,
};
use crate::view::controls::{rect_contains, ControlState, FocusState};
use crate::view::icons::{display_width, ellipsize, icon_cell, ICON_WIDTH};
use crate::view::RenderContext;

/// A localization key, resolved at render time
pub type TextKey = Cow<'static, str>;

/// Process-unique identity of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        RowId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// One row's description: icon, title, chevron flag and accessory.
///
/// Built with the `with_*` methods and read-only once handed to a section;
/// value changes flow through the accessory's binding.
#[derive(Debug, Clone)]
pub struct SettingsRowModel {
    id: RowId,
    icon: Option<String>,
    title: TextKey,
    chevron: bool,
    accessory: RowAccessory,
    disabled: bool,
}

impl SettingsRowModel {
    pub fn new(title: impl Into<TextKey>) -> Self {
        Self {
            id: RowId::next(),
            icon: None,
            title: title.into(),
            chevron: false,
            accessory: RowAccessory::None,
            disabled: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_chevron(mut self, chevron: bool) -> Self {
        self.chevron = chevron;
        self
    }

    pub fn with_accessory(mut self, accessory: RowAccessory) -> Self {
        self.accessory = accessory;
        self
    }

    /// Dimmed rows are skipped by keyboard selection and ignore input
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chevron(&self) -> bool {
        self.chevron
    }

    pub fn accessory(&self) -> &RowAccessory {
        &self.accessory
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Forward a mouse event to the accessory
    pub fn handle_mouse(
        &self,
        state: &mut ControlState,
        event: MouseEvent,
        layout: &RowLayout,
        popup: &PopupLayout,
    ) -> Option<AccessoryEvent> {
        if self.disabled {
            return None;
        }
        self.accessory
            .handle_mouse(state, event, &layout.accessory, popup)
    }

    /// Forward a key event to the accessory
    pub fn handle_key(&self, state: &mut ControlState, key: KeyEvent) -> Option<AccessoryEvent> {
        if self.disabled {
            return None;
        }
        self.accessory.handle_key(state, key)
    }
}

/// Where the parts of a rendered row ended up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowLayout {
    pub area: Rect,
    pub icon_area: Option<Rect>,
    pub title_area: Rect,
    pub accessory: AccessoryLayout,
}

impl RowLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.area, x, y)
    }
}

/// Render one row: icon column, title, spacer, trailing accessory.
///
/// The background follows `state.focus`; the bindings are read on every call.
pub fn render_row(
    frame: &mut Frame,
    area: Rect,
    row: &SettingsRowModel,
    state: &ControlState,
    ctx: &RenderContext,
) -> RowLayout {
    if area.height == 0 || area.width == 0 {
        return RowLayout::default();
    }
    let area = Rect::new(area.x, area.y, area.width, 1);
    let theme = ctx.theme;

    let bg = match state.focus {
        FocusState::Focused => Some(theme.selection_bg),
        FocusState::Hovered => Some(theme.hover_bg),
        FocusState::Normal | FocusState::Disabled => None,
    };
    if let Some(bg) = bg {
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
    }

    // One cell of padding on both sides
    let inner = Rect::new(
        area.x.saturating_add(1).min(area.right()),
        area.y,
        area.width.saturating_sub(2),
        1,
    );

    let mut x = inner.x;
    let icon_area = row.icon().and_then(|icon| {
        if inner.width < ICON_WIDTH + 1 {
            return None;
        }
        let icon_area = Rect::new(x, area.y, ICON_WIDTH, 1);
        let color = if row.is_disabled() {
            theme.disabled_fg
        } else {
            theme.icon_fg
        };
        frame.render_widget(
            Paragraph::new(Span::styled(icon_cell(icon), Style::default().fg(color))),
            icon_area,
        );
        x += ICON_WIDTH + 1;
        Some(icon_area)
    });

    let accessory_colors = AccessoryColors::from_theme(theme);
    let accessory_width = row.accessory().width(row.chevron());
    let title_room = inner.right().saturating_sub(x);
    let accessory_room = title_room.min(accessory_width);
    let accessory_area = Rect::new(inner.right() - accessory_room, area.y, accessory_room, 1);
    let accessory = render_accessory(
        frame,
        accessory_area,
        row.accessory(),
        row.chevron(),
        state,
        &accessory_colors,
    );

    // Keep at least one spacer cell between title and accessory
    let title_width = accessory_area.x.saturating_sub(x).saturating_sub(1);
    let title = ellipsize(&ctx.text(row.title()), title_width as usize);
    let mut title_style = Style::default().fg(if row.is_disabled() {
        theme.disabled_fg
    } else {
        theme.text_fg
    });
    if state.focus == FocusState::Focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let title_area = Rect::new(x, area.y, display_width(&title) as u16, 1);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(title, title_style))), title_area);

    RowLayout {
        area,
        icon_area,
        title_area,
        accessory,
    }
}
