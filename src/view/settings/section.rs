//! Titled groups of rows

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::accessory::AccessoryKind;
use super::link::SettingsLinkRow;
use super::row::{SettingsRowModel, TextKey};
use crate::view::icons::ellipsize;
use crate::view::RenderContext;

/// A child of a section
#[derive(Debug, Clone)]
pub enum SettingsItem {
    Row(SettingsRowModel),
    Link(SettingsLinkRow),
}

impl SettingsItem {
    /// The row that gets drawn for this item
    pub fn row(&self) -> &SettingsRowModel {
        match self {
            SettingsItem::Row(row) => row,
            SettingsItem::Link(link) => link.row(),
        }
    }

    pub fn title(&self) -> &str {
        self.row().title()
    }

    pub fn as_link(&self) -> Option<&SettingsLinkRow> {
        match self {
            SettingsItem::Link(link) => Some(link),
            SettingsItem::Row(_) => None,
        }
    }

    pub fn accessory_kind(&self) -> AccessoryKind {
        self.row().accessory().kind()
    }

    pub fn is_disabled(&self) -> bool {
        self.row().is_disabled()
    }
}

impl From<SettingsRowModel> for SettingsItem {
    fn from(row: SettingsRowModel) -> Self {
        SettingsItem::Row(row)
    }
}

impl From<SettingsLinkRow> for SettingsItem {
    fn from(link: SettingsLinkRow) -> Self {
        SettingsItem::Link(link)
    }
}

/// A titled group of items, kept in the order given
#[derive(Debug, Clone)]
pub struct SettingsSectionView {
    title: TextKey,
    items: Vec<SettingsItem>,
    footer: Option<TextKey>,
}

impl SettingsSectionView {
    /// An empty title draws no header line
    pub fn new<I>(title: impl Into<TextKey>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SettingsItem>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
            footer: None,
        }
    }

    /// Section made only of model rows
    pub fn rows(title: impl Into<TextKey>, rows: impl IntoIterator<Item = SettingsRowModel>) -> Self {
        Self::new(title, rows)
    }

    /// Explanatory text under the last item
    pub fn with_footer(mut self, footer: impl Into<TextKey>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[SettingsItem] {
        &self.items
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn has_header(&self) -> bool {
        !self.title.is_empty()
    }

    /// Lines taken: header, one per item, footer
    pub fn height(&self) -> usize {
        usize::from(self.has_header()) + self.items.len() + usize::from(self.footer.is_some())
    }
}

/// Draw the upper-cased section title
pub fn render_section_header(
    frame: &mut Frame,
    area: Rect,
    section: &SettingsSectionView,
    ctx: &RenderContext,
) {
    if area.width < 2 || area.height == 0 || !section.has_header() {
        return;
    }
    let text = ctx.text(section.title()).to_uppercase();
    let text = ellipsize(&text, (area.width - 1) as usize);
    let style = Style::default()
        .fg(ctx.theme.secondary_fg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", text), style)),
        Rect::new(area.x, area.y, area.width, 1),
    );
}

/// Draw the footer text, if the section has one
pub fn render_section_footer(
    frame: &mut Frame,
    area: Rect,
    section: &SettingsSectionView,
    ctx: &RenderContext,
) {
    let Some(footer) = section.footer() else {
        return;
    };
    if area.width < 2 || area.height == 0 {
        return;
    }
    let text = ellipsize(&ctx.text(footer), (area.width - 1) as usize);
    let style = Style::default()
        .fg(ctx.theme.secondary_fg)
        .add_modifier(Modifier::ITALIC);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", text), style)),
        Rect::new(area.x, area.y, area.width, 1),
    );
}
