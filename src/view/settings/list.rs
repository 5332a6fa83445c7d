//! Top-level settings container with a navigation title and stack

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::link::{Destination, NavAction};
use super::page::SettingsPage;
use super::row::TextKey;
use super::section::SettingsSectionView;
use crate::i18n::{BundledLocalizer, Localizer};
use crate::view::controls::rect_contains;
use crate::view::icons::{display_width, ellipsize};
use crate::view::theme::SettingsTheme;
use crate::view::RenderContext;

/// Title key used when none is given
pub const DEFAULT_TITLE: &str = "settings.title";

/// How the navigation title is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "runtime", derive(clap::ValueEnum))]
pub enum DisplayMode {
    /// Inline in the top border
    #[default]
    Compact,
    /// Bold title line above the content
    Regular,
}

/// Scrollable settings screen with navigation.
///
/// The root page is built from the given sections; following a link pushes
/// its destination, which is drawn in place of the page below it until it
/// is popped again with Escape, Backspace or the back marker.
pub struct SettingsList {
    title: TextKey,
    display_mode: DisplayMode,
    root: SettingsPage,
    stack: Vec<Box<dyn Destination>>,
    theme: SettingsTheme,
    localizer: Box<dyn Localizer>,
    /// Clickable back marker from the last render
    back_area: Option<Rect>,
}

impl SettingsList {
    pub fn new(sections: impl IntoIterator<Item = SettingsSectionView>) -> Self {
        Self {
            title: TextKey::Borrowed(DEFAULT_TITLE),
            display_mode: DisplayMode::default(),
            root: SettingsPage::new(DEFAULT_TITLE, sections),
            stack: Vec::new(),
            theme: SettingsTheme::default(),
            localizer: Box::new(BundledLocalizer::new()),
            back_area: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<TextKey>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn with_theme(mut self, theme: SettingsTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Resolve title keys with `localizer` instead of the bundled catalog
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Configured title key of the root screen
    pub fn navigation_title(&self) -> &str {
        &self.title
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Number of destinations pushed above the root page
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_root(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn root(&self) -> &SettingsPage {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SettingsPage {
        &mut self.root
    }

    pub fn theme(&self) -> &SettingsTheme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut SettingsTheme {
        &mut self.theme
    }

    /// Title key of the screen on top
    pub fn current_title(&self) -> &str {
        self.stack
            .last()
            .map(|destination| destination.title())
            .unwrap_or(&*self.title)
    }

    /// Title keys from the root to the screen on top
    pub fn breadcrumb(&self) -> Vec<&str> {
        std::iter::once(&*self.title)
            .chain(self.stack.iter().map(|destination| destination.title()))
            .collect()
    }

    pub fn has_open_popup(&self) -> bool {
        match self.stack.last() {
            Some(destination) => destination.has_open_popup(),
            None => self.root.has_open_popup(),
        }
    }

    pub fn push(&mut self, destination: Box<dyn Destination>) {
        tracing::debug!(
            "navigating to {} (depth {})",
            destination.title(),
            self.stack.len() + 1
        );
        self.stack.push(destination);
    }

    /// Return to the previous screen; `false` at the root
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(destination) => {
                tracing::debug!(
                    "navigated back from {} (depth {})",
                    destination.title(),
                    self.stack.len()
                );
                true
            }
            None => false,
        }
    }

    fn localize(&self, key: &str) -> String {
        self.localizer.localize(key)
    }

    /// Draw the frame, the title and the screen on top of the stack
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.back_area = None;
        if area.width < 3 || area.height < 3 {
            return;
        }

        let border = Style::default().fg(self.theme.border_fg);
        let title_style = Style::default()
            .fg(self.theme.title_fg)
            .add_modifier(Modifier::BOLD);

        let content = match self.display_mode {
            DisplayMode::Compact => {
                let crumbs: Vec<String> = self
                    .breadcrumb()
                    .into_iter()
                    .map(|key| self.localize(key))
                    .collect();
                let text = if self.is_root() {
                    format!(" {} ", crumbs.join(" › "))
                } else {
                    format!(" ‹ {} ", crumbs.join(" › "))
                };
                let text = ellipsize(&text, area.width.saturating_sub(2) as usize);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(Line::from(Span::styled(text, title_style)));
                let inner = block.inner(area);
                frame.render_widget(block, area);
                if !self.is_root() {
                    self.back_area = Some(Rect::new(area.x + 1, area.y, 3, 1));
                }
                inner
            }
            DisplayMode::Regular => {
                let block = Block::default().borders(Borders::ALL).border_style(border);
                let inner = block.inner(area);
                frame.render_widget(block, area);
                let text_width = inner.width.saturating_sub(1) as usize;
                let mut y = inner.y;

                let parent = self
                    .breadcrumb()
                    .iter()
                    .rev()
                    .nth(1)
                    .map(|key| self.localize(key));
                if let Some(parent) = parent {
                    let back = ellipsize(&format!("‹ {}", parent), text_width);
                    let back_area = Rect::new(inner.x + 1, y, display_width(&back) as u16, 1);
                    frame.render_widget(
                        Paragraph::new(Span::styled(
                            back,
                            Style::default().fg(self.theme.accent_fg),
                        )),
                        back_area,
                    );
                    self.back_area = Some(back_area);
                    y += 1;
                }

                if y < inner.bottom() {
                    let title = ellipsize(&self.localize(self.current_title()), text_width);
                    frame.render_widget(
                        Paragraph::new(Span::styled(
                            title,
                            title_style.add_modifier(Modifier::UNDERLINED),
                        )),
                        Rect::new(inner.x + 1, y, inner.width.saturating_sub(1), 1),
                    );
                    // Title line plus a blank separator
                    y = (y + 2).min(inner.bottom());
                }
                Rect::new(inner.x, y, inner.width, inner.bottom() - y)
            }
        };

        let ctx = RenderContext::new(&self.theme, self.localizer.as_ref());
        match self.stack.last_mut() {
            Some(destination) => destination.render(frame, content, &ctx),
            None => self.root.render(frame, content, &ctx),
        }
    }

    fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Ignored => false,
            NavAction::Consumed => true,
            NavAction::Push(destination) => {
                self.push(destination);
                true
            }
            NavAction::Pop => self.pop(),
        }
    }

    /// Handle a key press. Returns `false` when the list had no use for it
    /// (for example Escape at the root page).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = match self.stack.last_mut() {
            Some(destination) => destination.handle_key(key),
            None => self.root.handle_key(key),
        };
        self.apply(action)
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if event.kind == MouseEventKind::Down(MouseButton::Left)
            && !self.has_open_popup()
            && self
                .back_area
                .is_some_and(|area| rect_contains(area, event.column, event.row))
        {
            return self.pop();
        }
        let action = match self.stack.last_mut() {
            Some(destination) => destination.handle_mouse(event),
            None => self.root.handle_mouse(event),
        };
        self.apply(action)
    }

    /// Route a terminal event; key releases and repeats are ignored
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => false,
        }
    }
}
