use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Output;

    let block = Block::default()
        .title(t.panel_title("OUTPUT LOG", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.output_height = inner.height as usize;

    if app.output.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No translations yet.",
            t.text_muted(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    // Clamp scroll so the last line stays on screen
    let start = app.output_scroll.min(app.max_output_scroll());
    app.output_scroll = start;
    let end = (start + app.output_height).min(app.output.len());

    let lines: Vec<Line> = app.output[start..end]
        .iter()
        .map(|l| {
            if l.starts_with('$') {
                Line::styled(l.clone(), t.output_command())
            } else if l.starts_with('!') {
                Line::styled(l.clone(), t.output_warning())
            } else {
                Line::styled(l.clone(), t.output_text())
            }
        })
        .collect();

    let output = Paragraph::new(lines);
    frame.render_widget(output, inner);
}
