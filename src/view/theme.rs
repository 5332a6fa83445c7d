use ratatui::style::Color;

/// Orange used for warning glyphs (the terminal palette has no orange)
pub const ORANGE: Color = Color::Rgb(255, 149, 0);

/// Colors shared by every settings component.
///
/// Controls derive their own color sets from this through their
/// `from_theme` constructors.
#[derive(Debug, Clone)]
pub struct SettingsTheme {
    /// Navigation title
    pub title_fg: Color,
    /// Row titles and values
    pub text_fg: Color,
    /// Chevrons, section headers, footers, unfilled tracks
    pub secondary_fg: Color,
    /// Leading row icons
    pub icon_fg: Color,
    /// Focused controls and filled tracks
    pub accent_fg: Color,
    /// Background of the selected row
    pub selection_bg: Color,
    /// Background of the hovered row
    pub hover_bg: Color,
    /// List and popup borders
    pub border_fg: Color,
    /// Background of popups (option menus, palettes)
    pub popup_bg: Color,
    /// Disabled rows and buttons
    pub disabled_fg: Color,
    /// Checkmark status glyph and checked toggles
    pub success_fg: Color,
    /// Warning status glyph
    pub warning_fg: Color,
}

impl Default for SettingsTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::White,
            text_fg: Color::White,
            secondary_fg: Color::Gray,
            icon_fg: Color::Rgb(10, 132, 255),
            accent_fg: Color::Cyan,
            selection_bg: Color::Rgb(44, 44, 46),
            hover_bg: Color::Rgb(28, 28, 30),
            border_fg: Color::DarkGray,
            popup_bg: Color::Rgb(22, 22, 24),
            disabled_fg: Color::DarkGray,
            success_fg: Color::Green,
            warning_fg: ORANGE,
        }
    }
}
