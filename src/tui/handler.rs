//! Key handling for the TUI
//!
//! Maps key presses onto form interactions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => {}
    }
    Ok(())
}

/// Handle a key press
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    app.clear_status();
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Char(' ') => app.toggle_focused(),
        KeyCode::Left => app.cycle_select(false),
        KeyCode::Right => app.cycle_select(true),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.submit(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}
