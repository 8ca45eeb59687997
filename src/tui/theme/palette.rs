use ratatui::prelude::*;

/// Catppuccin Mocha colors used by the translator panes
pub struct Palette {
    pub text_primary: Color,
    pub text_muted: Color,

    /// Glyph text and focus accents
    pub accent_glyph: Color,
    pub accent_success: Color,
    pub accent_warning: Color,
    pub accent_danger: Color,

    pub border_default: Color,
    pub border_focused: Color,

    /// Background of the read-only result panes
    pub bg_readonly: Color,
    pub bg_badge: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_primary: Color::Rgb(205, 214, 244), // Text
            text_muted: Color::Rgb(108, 112, 134),   // Overlay0

            accent_glyph: Color::Rgb(203, 166, 247),   // Mauve
            accent_success: Color::Rgb(166, 227, 161), // Green
            accent_warning: Color::Rgb(249, 226, 175), // Yellow
            accent_danger: Color::Rgb(243, 139, 168),  // Red

            border_default: Color::Rgb(69, 71, 90),   // Surface1
            border_focused: Color::Rgb(137, 180, 250), // Blue

            bg_readonly: Color::Rgb(24, 24, 37), // Mantle
            bg_badge: Color::Rgb(166, 227, 161), // Green
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }
}
