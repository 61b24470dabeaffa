//! Summary card and issue list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::document::{Document, ElementRef, Marker, Styling, Tone};
use crate::tui::app::App;

fn tone_style(styling: Option<Styling>) -> Style {
    let Some(styling) = styling else {
        return Style::default().fg(Color::White);
    };
    let color = match styling.tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
    };
    let style = Style::default().fg(color);
    if styling.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn summary_line(document: &Document, target: Option<ElementRef>) -> Option<Line<'static>> {
    let element = document.get(target?);
    Some(Line::from(vec![
        Span::styled(
            format!(" {:<15}", element.label),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(element.value.clone(), tone_style(element.styling)),
    ]))
}

/// Render the summary card
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let document = app.controller.document();
    let Some(binding) = app.controller.schema().summary() else {
        return;
    };
    let card = document.get(binding.card);

    let border = if card.has_marker(Marker::FadeIn) && !card.hidden {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", card.label))
        .borders(Borders::ALL)
        .border_style(border);

    let lines: Vec<Line> = if card.hidden {
        vec![Line::from(Span::styled(
            " Enter your income or an expense to see a summary",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        [binding.income, binding.expenses, binding.balance, binding.ratio]
            .into_iter()
            .filter_map(|target| summary_line(document, target))
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Render the issues from the last blocked submission
pub fn render_issues(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Issues ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.issues.is_empty() {
            Color::DarkGray
        } else {
            Color::Red
        }));

    let lines: Vec<Line> = app
        .issues
        .iter()
        .map(|message| {
            Line::from(Span::styled(
                format!(" • {}", message),
                Style::default().fg(Color::Red),
            ))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
