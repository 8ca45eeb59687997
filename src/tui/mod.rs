mod app;
mod handlers;
mod theme;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use vasudeva_core::{Settings, TransliterationEngine};

use app::App;
use handlers::handle_input;
use ui::draw_ui;

pub fn run(engine: TransliterationEngine, settings: Settings) -> io::Result<()> {
    let mut app = App::new(engine, settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop(&mut terminal, &mut app, event::read);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// Draw and dispatch keys until quit; every error returns here so the
/// caller can restore the terminal.
fn event_loop<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> io::Result<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        let key = match next_event()? {
            Event::Key(key) => key,
            _ => continue,
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if handle_input(app, key)? {
            return Ok(());
        }
    }
}
