//! Event subscriptions
//!
//! Handlers are registered per (element, event kind) and run in the order
//! they were attached.

use std::collections::HashMap;

use crate::document::ElementRef;
use crate::models::{ExpenseCategory, FieldKey};

/// Kinds of user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Text edited
    Input,
    /// Checkbox toggled or selection changed
    Change,
    /// Field lost focus
    Blur,
    /// Form submission attempted
    Submit,
}

/// Work to perform when an event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Bring the category's amount field in line with its checkbox
    SyncExpenseField(ExpenseCategory),
    /// Clear an amount edited while its checkbox is unchecked
    ClearUnlessChecked(ExpenseCategory),
    /// Recompute and render the summary
    RecomputeSummary,
    /// Run the field-level rule
    ValidateField(FieldKey),
    /// Validate the whole form before submitting
    ValidateSubmission,
}

/// Registry of handlers keyed by element and event kind
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    handlers: HashMap<(ElementRef, EventKind), Vec<Handler>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler after any already attached to the same key
    pub fn subscribe(&mut self, target: ElementRef, kind: EventKind, handler: Handler) {
        self.handlers.entry((target, kind)).or_default().push(handler);
    }

    /// Handlers for a key, in attachment order
    pub fn handlers(&self, target: ElementRef, kind: EventKind) -> &[Handler] {
        self.handlers
            .get(&(target, kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether anything listens for this key
    pub fn has_listeners(&self, target: ElementRef, kind: EventKind) -> bool {
        !self.handlers(target, kind).is_empty()
    }

    /// Total number of attached handlers
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
