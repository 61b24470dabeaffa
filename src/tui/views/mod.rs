//! TUI Views module
//!
//! Contains the form panel, the summary card with its issue list, and the
//! status bar.

pub mod form;
pub mod status_bar;
pub mod summary;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let header = Paragraph::new(" Household Expense Survey")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout.header);

    form::render(frame, app, layout.form);
    summary::render(frame, app, layout.summary);
    summary::render_issues(frame, app, layout.issues);
    status_bar::render(frame, app, layout.status_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(110, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_initial_form() {
        let app = App::new(&Settings::default());
        let text = screen(&app);

        assert!(text.contains("Household Expense Survey"));
        assert!(text.contains("[ ] Utilities"));
        assert!(text.contains("Enter your income or an expense"));
        // tooltip for the focused age field
        assert!(text.contains("between 18 and 120"));
    }

    #[test]
    fn test_render_summary_after_input() {
        let mut app = App::new(&Settings::default());
        app.controller.set_value("total_income", "2500");
        let text = screen(&app);

        assert!(text.contains("$2,500.00"));
        assert!(text.contains("0.0%"));
    }
}
