//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::paths::SurveyPaths;
use crate::config::settings::Settings;
use crate::submission::SurveyResponse;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive survey form
///
/// Returns the completed response, or `None` if the user quit first.
pub fn run_tui(paths: &SurveyPaths, settings: &Settings) -> Result<Option<SurveyResponse>> {
    info!(log = %paths.log_file().display(), "starting interactive survey");

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    let events = EventHandler::default();

    let result = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    result?;

    Ok(app.response)
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| super::views::render(frame, app))?;

        match events.next()? {
            Event::Tick | Event::Resize(_, _) => {}
            event => handle_event(app, event)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
