mod footer;
mod header;
mod output_panel;
mod text_panel;

use ratatui::prelude::*;

use crate::tui::app::{App, Pane};
use text_panel::TextPanel;

pub fn draw_ui(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(6),    // English -> Vasudeva
            Constraint::Min(6),    // Vasudeva -> English
            Constraint::Length(8), // Output log
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    render_translation_rows(frame, app, root[1], root[2]);
    output_panel::render(frame, app, root[3]);
    footer::render(frame, app, root[4]);
}

/// Two rows of two panes:
/// English input | glyph output, then English output | glyph input.
fn render_translation_rows(frame: &mut Frame, app: &App, top: Rect, bottom: Rect) {
    let columns = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let top_cols = Layout::horizontal(columns).split(top);
    let bottom_cols = Layout::horizontal(columns).split(bottom);
    let table = app.table_name();

    TextPanel::input("ENGLISH", &app.latin_input, false)
        .focused(app.focused_pane == Pane::LatinInput)
        .render(frame, top_cols[0]);
    TextPanel::result(&format!("{} (FROM ENGLISH)", table.to_uppercase()), &app.glyph_output, true)
        .render(frame, top_cols[1]);
    TextPanel::result("ENGLISH (FROM GLYPHS)", &app.latin_output, false)
        .render(frame, bottom_cols[0]);
    TextPanel::input(&table.to_uppercase(), &app.glyph_input, true)
        .focused(app.focused_pane == Pane::GlyphInput)
        .render(frame, bottom_cols[1]);
}
