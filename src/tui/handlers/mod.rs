use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Pane};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if app.confirm_prompt.is_some() {
        return handle_confirmation(app, key.code);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys: plain letters are text, so every command needs Ctrl
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return Ok(true),
        KeyCode::Char('l') if ctrl => {
            app.request_clear_all();
            return Ok(false);
        }
        KeyCode::Char('r') if ctrl => {
            app.reload_settings();
            return Ok(false);
        }
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return Ok(false);
        }
        _ => {}
    }

    if ctrl {
        return Ok(false);
    }

    handle_pane_input(app, key.code);

    Ok(false)
}

fn handle_confirmation(app: &mut App, key: KeyCode) -> io::Result<bool> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(action) = app.pending_action.take() {
                app.clear_confirm();
                app.run_pending(action);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.set_status("Cancelled");
            app.clear_confirm();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_pane_input(app: &mut App, key: KeyCode) {
    match app.focused_pane {
        Pane::LatinInput | Pane::GlyphInput => handle_text_input(app, key),
        Pane::Output => handle_output_input(app, key),
    }
}

fn handle_text_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.translate_focused(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

fn handle_output_input(app: &mut App, key: KeyCode) {
    // Output log scrolling
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_output_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_output_down(),
        _ => {}
    }
}
