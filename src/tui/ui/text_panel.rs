use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::theme::theme;

/// One of the four translation text areas
pub struct TextPanel<'a> {
    title: String,
    text: &'a str,
    glyphs: bool,
    editable: bool,
    focused: bool,
}

impl<'a> TextPanel<'a> {
    /// An editable pane holding what the user typed
    pub fn input(title: &str, text: &'a str, glyphs: bool) -> Self {
        Self {
            title: title.to_string(),
            text,
            glyphs,
            editable: true,
            focused: false,
        }
    }

    /// A read-only pane holding a translation
    pub fn result(title: &str, text: &'a str, glyphs: bool) -> Self {
        Self {
            editable: false,
            ..Self::input(title, text, glyphs)
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let mut block = Block::default()
            .title(t.panel_title(&self.title, self.focused))
            .borders(Borders::ALL)
            .border_style(t.panel_border(self.focused))
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Plain
            });
        if !self.editable {
            block = block.style(t.readonly());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text_style = if self.glyphs {
            t.glyph_text()
        } else {
            t.input_text()
        };

        let mut lines: Vec<Line> = self
            .text
            .split('\n')
            .map(|l| Line::styled(l.to_string(), text_style))
            .collect();

        if self.focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("▏", t.cursor()));
            }
        } else if self.text.is_empty() {
            let hint = if self.editable {
                "Tab here and type, Enter to translate"
            } else {
                "Translation appears here"
            };
            lines = vec![Line::styled(hint, t.text_muted())];
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
