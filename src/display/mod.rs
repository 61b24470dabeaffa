//! Display formatting for terminal output
//!
//! Formats the summary, validation results and completed responses for the
//! headless commands.

pub mod summary;

pub use summary::{format_issues, format_response, format_summary};
