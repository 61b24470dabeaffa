//! Survey form controller
//!
//! Owns the rendered document, resolves the schema once, wires the event
//! registry, and exposes the operations hosts and tests call directly.

pub mod events;
pub mod tooltips;

pub use events::{EventKind, EventRegistry, Handler};
pub use tooltips::{HintTooltips, TooltipProvider};

use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::currency::CurrencyFormat;
use crate::document::{Document, ElementRef, FormSchema, Marker, Patch, PatchOp, RenderSurface};
use crate::error::SurveyResult;
use crate::models::{ExpenseCategory, FieldKey, FormState};
use crate::services::{
    clear_unless_checked, compute_summary, mark_invalid, mark_valid, render_summary,
    sync_amount_field, validate_field, validate_form, MessageDisplay, Summary, ValidationIssue,
    ValidationReport,
};
use crate::submission::FormData;

/// Controller construction options
#[derive(Default)]
pub struct ControllerOptions {
    pub currency: CurrencyFormat,
    pub messages: MessageDisplay,
    pub tooltips: Option<Box<dyn TooltipProvider>>,
}

impl ControllerOptions {
    /// Options matching the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        let messages = if settings.inline_messages {
            MessageDisplay::Inline
        } else {
            MessageDisplay::Accumulate
        };
        let tooltips: Option<Box<dyn TooltipProvider>> = if settings.show_tooltips {
            Some(Box::new(HintTooltips::new()))
        } else {
            None
        };
        Self {
            currency: settings.currency.clone(),
            messages,
            tooltips,
        }
    }

    /// Use a tooltip provider
    pub fn with_tooltips(mut self, provider: impl TooltipProvider + 'static) -> Self {
        self.tooltips = Some(Box::new(provider));
        self
    }

    /// Choose how validation messages are displayed
    pub fn with_messages(mut self, messages: MessageDisplay) -> Self {
        self.messages = messages;
        self
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed; the collected form data goes out
    Submitted(FormData),
    /// Validation failed; submission was cancelled
    Blocked(ValidationReport),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// The survey form controller
pub struct SurveyController {
    document: Document,
    schema: FormSchema,
    registry: EventRegistry,
    currency: CurrencyFormat,
    messages: MessageDisplay,
    tooltips: Option<Box<dyn TooltipProvider>>,
}

impl SurveyController {
    /// Start the controller, skipping whatever the document lacks
    pub fn new(document: Document, options: ControllerOptions) -> Self {
        let schema = FormSchema::bind(&document);
        Self::start(document, schema, options)
    }

    /// Start the controller, failing if any survey element is missing
    pub fn strict(document: Document, options: ControllerOptions) -> SurveyResult<Self> {
        let schema = FormSchema::bind(&document);
        schema.require_complete()?;
        Ok(Self::start(document, schema, options))
    }

    fn start(document: Document, schema: FormSchema, options: ControllerOptions) -> Self {
        let registry = register_handlers(&schema);
        let mut controller = Self {
            document,
            schema,
            registry,
            currency: options.currency,
            messages: options.messages,
            tooltips: options.tooltips,
        };

        let mut initial = Patch::new();
        for binding in controller.schema.expenses() {
            let checked = controller.document.get(binding.checkbox).checked;
            initial.extend(sync_amount_field(binding, checked));
        }
        controller.document.apply(&initial);

        if let Some(provider) = controller.tooltips.as_mut() {
            for (target, element) in controller.document.elements() {
                if let Some(text) = &element.tooltip {
                    provider.attach(target, text);
                }
            }
        }

        debug!(
            handlers = controller.registry.len(),
            categories = controller.schema.expenses().len(),
            "survey controller started"
        );
        controller
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Tooltip for an element, when a provider was injected
    pub fn tooltip(&self, target: ElementRef) -> Option<&str> {
        self.tooltips.as_ref()?.tooltip_for(target)
    }

    /// Run the handlers attached to `target` for `kind`, in order
    ///
    /// Returns the report of a submission check if one ran.
    pub fn dispatch(&mut self, target: ElementRef, kind: EventKind) -> Option<ValidationReport> {
        let handlers = self.registry.handlers(target, kind).to_vec();
        debug!(
            element = %self.document.get(target).id,
            ?kind,
            handlers = handlers.len(),
            "dispatching event"
        );

        let mut report = None;
        for handler in handlers {
            match handler {
                Handler::SyncExpenseField(category) => self.sync_expense_field(category),
                Handler::ClearUnlessChecked(category) => self.clear_unless_checked(category),
                Handler::RecomputeSummary => {
                    self.recompute_summary();
                }
                Handler::ValidateField(key) => {
                    self.validate_field(key);
                }
                Handler::ValidateSubmission => report = Some(self.validate_submission()),
            }
        }
        report
    }

    /// Set an input's text and fire `Input`
    pub fn set_value(&mut self, id: &str, text: &str) {
        let Some(target) = self.resolve(id) else {
            return;
        };
        self.document.apply_op(&PatchOp::SetValue {
            target,
            value: text.to_string(),
        });
        self.dispatch(target, EventKind::Input);
    }

    /// Check or uncheck a category and fire `Change`
    pub fn set_checked(&mut self, category: ExpenseCategory, checked: bool) {
        let Some(binding) = self.schema.expense(category).copied() else {
            warn!(%category, "expense category is not bound");
            return;
        };
        self.document.apply_op(&PatchOp::SetChecked {
            target: binding.checkbox,
            checked,
        });
        self.dispatch(binding.checkbox, EventKind::Change);
    }

    /// Flip a category checkbox
    pub fn toggle(&mut self, category: ExpenseCategory) {
        if let Some(binding) = self.schema.expense(category) {
            let checked = self.document.get(binding.checkbox).checked;
            self.set_checked(category, !checked);
        }
    }

    /// Choose a select option and fire `Change`
    ///
    /// Values that are not one of the options leave the selection empty.
    pub fn select(&mut self, id: &str, value: &str) {
        let Some(target) = self.resolve(id) else {
            return;
        };
        self.document.apply_op(&PatchOp::SetValue {
            target,
            value: value.to_string(),
        });
        self.dispatch(target, EventKind::Change);
    }

    /// Fire `Blur` on an element
    pub fn blur(&mut self, id: &str) {
        if let Some(target) = self.resolve(id) {
            self.dispatch(target, EventKind::Blur);
        }
    }

    /// Move input focus
    pub fn focus(&mut self, target: ElementRef) {
        self.document.apply_op(&PatchOp::Focus(target));
    }

    /// Attempt to submit the form
    pub fn submit(&mut self) -> SubmitOutcome {
        let report = match self.schema.form() {
            Some(form) => self.dispatch(form, EventKind::Submit),
            None => None,
        };

        match report {
            Some(report) if !report.is_valid() => {
                info!(issues = report.issues.len(), "submission blocked");
                SubmitOutcome::Blocked(report)
            }
            _ => {
                let data = self.form_data();
                info!(fields = data.fields().len(), "form submitted");
                SubmitOutcome::Submitted(data)
            }
        }
    }

    /// Recompute totals and redraw the summary card
    ///
    /// Returns `None` without touching the document when the income field or
    /// the summary card is missing.
    pub fn recompute_summary(&mut self) -> Option<Summary> {
        self.schema.total_income()?;
        let binding = *self.schema.summary()?;

        let summary = compute_summary(&self.snapshot());
        debug!(
            income = summary.income,
            total_expenses = summary.total_expenses,
            ratio = summary.ratio,
            "summary recomputed"
        );
        let patch = render_summary(&summary, &binding, &self.currency);
        self.document.apply(&patch);
        Some(summary)
    }

    /// Validate every field and mark each one
    ///
    /// Does not scroll or focus; that only happens on a blocked submission.
    pub fn validate_form(&mut self) -> ValidationReport {
        let report = validate_form(&self.snapshot());
        let patch = report.to_patch(&self.schema, self.messages);
        self.document.apply(&patch);
        report
    }

    /// Format an amount with the configured currency
    pub fn format_currency(&self, amount: f64) -> String {
        self.currency.format(amount)
    }

    /// Current values of the bound fields
    pub fn snapshot(&self) -> FormState {
        FormState::capture(&self.document, &self.schema)
    }

    /// Values a submission would carry
    pub fn form_data(&self) -> FormData {
        FormData::collect(&self.document)
    }

    fn resolve(&self, id: &str) -> Option<ElementRef> {
        let found = self.document.lookup(id);
        if found.is_none() {
            warn!(element = id, "no such element");
        }
        found
    }

    fn sync_expense_field(&mut self, category: ExpenseCategory) {
        if let Some(binding) = self.schema.expense(category) {
            let checked = self.document.get(binding.checkbox).checked;
            let patch = sync_amount_field(binding, checked);
            self.document.apply(&patch);
        }
    }

    fn clear_unless_checked(&mut self, category: ExpenseCategory) {
        if let Some(binding) = self.schema.expense(category) {
            let checked = self.document.get(binding.checkbox).checked;
            let patch = clear_unless_checked(binding, checked);
            self.document.apply(&patch);
        }
    }

    fn validate_field(&mut self, key: FieldKey) -> bool {
        let Some(target) = self.schema.field(key) else {
            return true;
        };
        let ok = validate_field(key, &self.document.get(target).value);
        let patch = if ok {
            mark_valid(target)
        } else {
            let message = match self.messages {
                MessageDisplay::Inline => ValidationIssue::for_field(key).map(|i| i.to_string()),
                MessageDisplay::Accumulate => None,
            };
            mark_invalid(target, message.as_deref())
        };
        self.document.apply(&patch);
        ok
    }

    fn validate_submission(&mut self) -> ValidationReport {
        let report = self.validate_form();
        if !report.is_valid() {
            if let Some(first) = self.document.first_focusable_with_marker(Marker::Invalid) {
                self.document.apply_op(&PatchOp::ScrollIntoView(first));
                self.document.apply_op(&PatchOp::Focus(first));
            }
        }
        report
    }
}

/// Attach every survey handler the schema allows
fn register_handlers(schema: &FormSchema) -> EventRegistry {
    let mut registry = EventRegistry::new();

    for binding in schema.expenses() {
        let category = binding.category;
        registry.subscribe(
            binding.checkbox,
            EventKind::Change,
            Handler::SyncExpenseField(category),
        );
        registry.subscribe(binding.checkbox, EventKind::Change, Handler::RecomputeSummary);

        registry.subscribe(
            binding.amount,
            EventKind::Input,
            Handler::ClearUnlessChecked(category),
        );
        registry.subscribe(binding.amount, EventKind::Input, Handler::RecomputeSummary);
    }

    // expense calculation wiring, attached after the enablement handlers
    for binding in schema.expenses() {
        registry.subscribe(binding.amount, EventKind::Input, Handler::RecomputeSummary);
    }
    if let Some(income) = schema.total_income() {
        registry.subscribe(income, EventKind::Input, Handler::RecomputeSummary);
    }

    if let Some(form) = schema.form() {
        registry.subscribe(form, EventKind::Submit, Handler::ValidateSubmission);

        let mut blur_fields = vec![FieldKey::Age, FieldKey::Gender, FieldKey::TotalIncome];
        blur_fields.extend(
            schema
                .expenses()
                .iter()
                .map(|b| FieldKey::ExpenseAmount(b.category)),
        );
        for key in blur_fields {
            if let Some(target) = schema.field(key) {
                registry.subscribe(target, EventKind::Blur, Handler::ValidateField(key));
            }
        }
    }

    registry
}
