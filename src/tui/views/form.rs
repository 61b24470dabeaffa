//! Form view
//!
//! Renders every visible control of the document in document order.
//! Amount inputs are indented under their checkbox.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::document::ElementRef;
use crate::models::FieldKey;
use crate::tui::app::App;
use crate::tui::widgets::FieldWidget;

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let document = app.controller.document();
    let schema = app.controller.schema();
    let title = schema
        .form()
        .map(|form| document.get(form).label.clone())
        .unwrap_or_else(|| "Survey".to_string());

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows: Vec<ElementRef> = document
        .elements()
        .filter(|(_, e)| e.kind.is_control() && !e.hidden)
        .map(|(r, _)| r)
        .collect();

    // keep the focused row on screen
    let focused = app.focused();
    let focused_row = rows
        .iter()
        .position(|r| Some(*r) == focused)
        .unwrap_or(0);
    let height = inner.height as usize;
    let offset = if height == 0 {
        0
    } else {
        focused_row.saturating_sub(height - 1)
    };

    for (line, target) in rows.iter().skip(offset).take(height).enumerate() {
        let element = document.get(*target);
        let indent = match schema.field_for(*target) {
            Some(FieldKey::ExpenseAmount(_)) => 4,
            _ => 0,
        };
        let row = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
        let widget = FieldWidget::new(element)
            .focused(Some(*target) == focused)
            .indent(indent);
        frame.render_widget(widget, row);
    }
}
