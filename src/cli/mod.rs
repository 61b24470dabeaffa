//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the form controller.

pub mod check;
pub mod fill;

pub use check::{handle_check_command, CheckArgs};
pub use fill::{handle_fill_command, FillArgs};
