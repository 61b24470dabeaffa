//! Form field widget
//!
//! Renders one control of the document on a single line: label, value (or
//! placeholder), validation marker and any adjacent feedback message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::document::{Element, ElementKind, Marker};

/// Width reserved for labels
const LABEL_WIDTH: usize = 28;

/// A single form control
#[derive(Debug, Clone)]
pub struct FieldWidget<'a> {
    element: &'a Element,
    focused: bool,
    indent: u16,
}

impl<'a> FieldWidget<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self {
            element,
            focused: false,
            indent: 0,
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Indent the field, e.g. an amount under its checkbox
    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    fn label_style(&self) -> Style {
        if self.element.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    fn value_span(&self) -> Span<'a> {
        let element = self.element;
        match &element.kind {
            ElementKind::Checkbox => {
                let mark = if element.checked { "[x]" } else { "[ ]" };
                Span::styled(mark, Style::default().fg(Color::White))
            }
            ElementKind::Select(options) => {
                let label = options
                    .iter()
                    .find(|o| o.value == element.value)
                    .map(|o| o.label.as_str())
                    .unwrap_or("");
                Span::styled(format!("< {} >", label), Style::default().fg(Color::White))
            }
            _ if element.value.is_empty() && !self.focused => Span::styled(
                element.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ),
            _ if element.disabled => {
                Span::styled(element.value.clone(), Style::default().fg(Color::DarkGray))
            }
            _ => Span::styled(element.value.clone(), Style::default().fg(Color::White)),
        }
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let element = self.element;
        let pointer = if self.focused { "> " } else { "  " };
        let mut spans = vec![
            Span::raw(" ".repeat(self.indent as usize)),
            Span::styled(pointer, Style::default().fg(Color::Cyan)),
        ];

        if element.kind == ElementKind::Checkbox {
            spans.push(self.value_span());
            spans.push(Span::raw(" "));
            spans.push(Span::styled(element.label.clone(), self.label_style()));
        } else {
            let width = LABEL_WIDTH.saturating_sub(self.indent as usize);
            spans.push(Span::styled(
                format!("{:<width$}", element.label, width = width),
                self.label_style(),
            ));
            spans.push(self.value_span());
            if self.focused && matches!(element.kind, ElementKind::NumberInput) {
                spans.push(Span::styled(
                    "_",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
            }
        }

        if element.has_marker(Marker::Invalid) {
            spans.push(Span::styled(" ✗", Style::default().fg(Color::Red)));
        } else if element.has_marker(Marker::Valid) {
            spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
        }
        if let Some(message) = &element.feedback {
            spans.push(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
