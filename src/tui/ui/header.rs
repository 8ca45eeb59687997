use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let trim = if app.settings.trim_input() {
        "trim on"
    } else {
        "trim off"
    };

    let line = Line::from(vec![
        Span::styled("vasudeva ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{}] ", app.table_name()), t.table_badge()),
        Span::styled(
            format!("{} glyphs, {} ", app.engine.table().len(), trim),
            t.text_muted(),
        ),
        Span::styled("Ctrl-Q:quit", t.key_hint()),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Left);

    frame.render_widget(header, area);
}
