use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::{theme, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    if let Some(prompt) = &app.confirm_prompt {
        render_confirm_prompt(frame, app, area, prompt, t);
    } else {
        render_status_and_hints(frame, app, area, t);
    }
}

fn render_confirm_prompt(frame: &mut Frame, app: &App, area: Rect, prompt: &str, t: &Theme) {
    let lines = vec![
        Line::styled(format!("Status: {}", app.status), t.status_message()),
        Line::from(vec![
            Span::styled(format!("CONFIRM: {} ", prompt), t.confirm_prompt()),
            Span::styled("[", t.text_muted()),
            Span::styled("y", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Enter", t.key_hint()),
            Span::styled(":yes  ", t.text_muted()),
            Span::styled("n", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Esc", t.key_hint()),
            Span::styled(":no]", t.text_muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_and_hints(frame: &mut Frame, app: &App, area: Rect, t: &Theme) {
    let line1 = Line::styled(format!("Status: {}", app.status), t.status_message());

    let action = match app.focused_pane {
        Pane::LatinInput => ":English -> glyphs  ",
        Pane::GlyphInput => ":glyphs -> English  ",
        Pane::Output => ":-  ",
    };
    let line2 = Line::from(vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":next pane  ", t.text_muted()),
        Span::styled("Enter", t.key_hint()),
        Span::styled(action, t.text_muted()),
        Span::styled("Ctrl-L", t.key_hint()),
        Span::styled(":clear all  ", t.text_muted()),
        Span::styled("Ctrl-R", t.key_hint()),
        Span::styled(":reload  ", t.text_muted()),
        Span::styled("Esc", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);

    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}
