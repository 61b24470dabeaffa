//! Terminal User Interface module
//!
//! Renders the survey document with ratatui and feeds key presses back to
//! the form controller as input, change, blur and submit events.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
