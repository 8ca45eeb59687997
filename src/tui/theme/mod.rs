mod palette;

use ratatui::prelude::*;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        let style = if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            self.text_muted()
        };
        Line::styled(format!(" {} ", title), style)
    }

    // Badge with the active table name
    pub fn table_badge(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.palette.bg_badge)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Latin text in an editable pane
    pub fn input_text(&self) -> Style {
        self.text_primary()
    }

    // Glyph text, in either pane kind
    pub fn glyph_text(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_glyph)
            .add_modifier(Modifier::BOLD)
    }

    // Background for result panes that cannot be edited
    pub fn readonly(&self) -> Style {
        Style::default().bg(self.palette.bg_readonly)
    }

    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.palette.border_focused)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    pub fn output_command(&self) -> Style {
        Style::default()
            .fg(self.palette.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    pub fn output_warning(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    pub fn output_text(&self) -> Style {
        Style::default().fg(self.palette.accent_success)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    pub fn confirm_prompt(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
