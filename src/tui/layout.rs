//! Layout definitions for the TUI
//!
//! Form on the left, summary and issues on the right, status bar at the
//! bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Form fields
    pub form: Rect,
    /// Summary card
    pub summary: Rect,
    /// Validation issues from the last submission attempt
    pub issues: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Summary
                Constraint::Min(3),    // Issues
            ])
            .split(horizontal[1]);

        Self {
            header: vertical[0],
            form: horizontal[0],
            summary: side[0],
            issues: side[1],
            status_bar: vertical[2],
        }
    }
}
