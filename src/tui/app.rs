//! Application state for the TUI
//!
//! The App wraps the form controller and translates key-level intents
//! (move focus, type, toggle, submit) into controller events.

use tracing::warn;

use crate::config::settings::Settings;
use crate::controller::{ControllerOptions, SubmitOutcome, SurveyController};
use crate::document::{Document, ElementKind, ElementRef};
use crate::models::FieldKey;
use crate::submission::SurveyResponse;

/// Main application state
pub struct App {
    /// The form controller, which owns the rendered document
    pub controller: SurveyController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Messages from the last blocked submission
    pub issues: Vec<String>,

    /// The completed response, once submitted
    pub response: Option<SurveyResponse>,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: &Settings) -> Self {
        let options = ControllerOptions::from_settings(settings);
        Self::with_controller(SurveyController::new(Document::survey(), options))
    }

    /// Create an App around an existing controller
    pub fn with_controller(mut controller: SurveyController) -> Self {
        if let Some(first) = focus_order(controller.document()).first() {
            controller.focus(*first);
        }
        Self {
            controller,
            should_quit: false,
            status_message: None,
            issues: Vec::new(),
            response: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Element holding focus
    pub fn focused(&self) -> Option<ElementRef> {
        self.controller.document().focused()
    }

    fn focused_id(&self) -> Option<String> {
        self.focused()
            .map(|target| self.controller.document().get(target).id.clone())
    }

    /// Move focus to the next enabled control, blurring the current one
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Move focus to the previous enabled control, blurring the current one
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let current = self.focused();
        if let Some(id) = self.focused_id() {
            self.controller.blur(&id);
        }

        let order = focus_order(self.controller.document());
        if order.is_empty() {
            return;
        }

        let next = match current {
            Some(current) if forward => order
                .iter()
                .find(|r| r.index() > current.index())
                .unwrap_or(&order[0]),
            Some(current) => order
                .iter()
                .rev()
                .find(|r| r.index() < current.index())
                .unwrap_or(&order[order.len() - 1]),
            None => &order[0],
        };
        self.controller.focus(*next);
    }

    /// Toggle the focused checkbox
    pub fn toggle_focused(&mut self) {
        let Some(target) = self.focused() else {
            return;
        };
        if let Some(FieldKey::ExpenseCheck(category)) = self.controller.schema().field_for(target) {
            self.controller.toggle(category);
        }
    }

    /// Cycle the focused select through its options
    pub fn cycle_select(&mut self, forward: bool) {
        let Some(target) = self.focused() else {
            return;
        };
        let element = self.controller.document().get(target);
        let options = element.options();
        if options.is_empty() {
            return;
        }

        let current = options
            .iter()
            .position(|o| o.value == element.value)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        let value = options[next].value.clone();
        let id = element.id.clone();
        self.controller.select(&id, &value);
    }

    /// Type a character into the focused number input
    pub fn insert_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        self.edit_focused(|value| value.push(c));
    }

    /// Delete the last character of the focused number input
    pub fn backspace(&mut self) {
        self.edit_focused(|value| {
            value.pop();
        });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(target) = self.focused() else {
            return;
        };
        let element = self.controller.document().get(target);
        if element.kind != ElementKind::NumberInput || element.disabled {
            return;
        }
        let mut value = element.value.clone();
        let id = element.id.clone();
        edit(&mut value);
        self.controller.set_value(&id, &value);
    }

    /// Attempt to submit the form
    pub fn submit(&mut self) {
        match self.controller.submit() {
            SubmitOutcome::Blocked(report) => {
                self.issues = report.messages();
                self.set_status(format!("Please fix {} issue(s)", self.issues.len()));
            }
            SubmitOutcome::Submitted(data) => match SurveyResponse::from_form_data(&data) {
                Ok(response) => {
                    self.issues.clear();
                    self.response = Some(response);
                    self.quit();
                }
                Err(e) => {
                    warn!(error = %e, "submitted form data rejected");
                    self.set_status(e.to_string());
                }
            },
        }
    }
}

/// Controls the user can move focus to, in document order
pub fn focus_order(document: &Document) -> Vec<ElementRef> {
    document
        .elements()
        .filter(|(_, e)| e.is_focusable())
        .map(|(r, _)| r)
        .collect()
}
