//! Rendered form document
//!
//! The document is the shared state every component reads from and writes
//! to: an ordered list of elements (document order) addressed by id. Form
//! logic never mutates it directly; it produces a [`Patch`] that a
//! [`RenderSurface`] applies.

pub mod patch;
pub mod schema;

use std::collections::{BTreeSet, HashMap};

use crate::models::field::{AGE_ID, FORM_ID, GENDER_ID, TOTAL_INCOME_ID};
use crate::models::{ExpenseCategory, Gender};

pub use patch::{Patch, PatchOp, RenderSurface, Transition};
pub use schema::{ExpenseBinding, FormSchema, SummaryBinding};

/// Id of the summary container
pub const SUMMARY_CARD_ID: &str = "summaryCard";
/// Id of the summary income display
pub const SUMMARY_INCOME_ID: &str = "summaryIncome";
/// Id of the summary expenses display
pub const SUMMARY_EXPENSES_ID: &str = "summaryExpenses";
/// Id of the summary balance display
pub const SUMMARY_BALANCE_ID: &str = "summaryBalance";
/// Id of the summary ratio display
pub const SUMMARY_RATIO_ID: &str = "summaryRatio";

/// Handle to an element, valid for the document it was resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(usize);

impl ElementRef {
    /// Position in document order
    pub fn index(self) -> usize {
        self.0
    }
}

/// One option of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// What kind of element this is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Form,
    Checkbox,
    NumberInput,
    Select(Vec<SelectOption>),
    Container,
    Text,
}

impl ElementKind {
    /// Whether the element is a control that posts a value
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Checkbox | Self::NumberInput | Self::Select(_))
    }
}

/// Visual markers (CSS classes in a browser rendering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    ExpenseEnabled,
    Valid,
    Invalid,
    FadeIn,
}

impl Marker {
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::ExpenseEnabled => "expense-enabled",
            Self::Valid => "is-valid",
            Self::Invalid => "is-invalid",
            Self::FadeIn => "fade-in",
        }
    }
}

/// Text color tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

/// Text styling for display elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Styling {
    pub tone: Tone,
    pub bold: bool,
}

impl Styling {
    pub const fn plain(tone: Tone) -> Self {
        Self { tone, bold: false }
    }

    pub const fn bold(tone: Tone) -> Self {
        Self { tone, bold: true }
    }

    /// Class list in a browser rendering
    pub fn class_name(&self) -> String {
        let tone = match self.tone {
            Tone::Success => "text-success",
            Tone::Warning => "text-warning",
            Tone::Danger => "text-danger",
        };
        if self.bold {
            format!("{} fw-bold", tone)
        } else {
            tone.to_string()
        }
    }
}

/// An element of the rendered form
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub label: String,
    /// Current value (inputs/selects) or text content (display elements)
    pub value: String,
    pub placeholder: String,
    pub checked: bool,
    pub disabled: bool,
    pub hidden: bool,
    pub markers: BTreeSet<Marker>,
    /// Markers on the element's container
    pub container_markers: BTreeSet<Marker>,
    /// Adjacent feedback message, created on demand
    pub feedback: Option<String>,
    pub styling: Option<Styling>,
    /// Tooltip text for elements that carry one
    pub tooltip: Option<String>,
}

impl Element {
    /// Create an element with defaults
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: String::new(),
            value: String::new(),
            placeholder: String::new(),
            checked: false,
            disabled: false,
            hidden: false,
            markers: BTreeSet::new(),
            container_markers: BTreeSet::new(),
            feedback: None,
            styling: None,
            tooltip: None,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the tooltip text
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the hidden state
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    pub fn container_has_marker(&self, marker: Marker) -> bool {
        self.container_markers.contains(&marker)
    }

    /// Options of a select element
    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            ElementKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Whether the user can move focus onto this element
    pub fn is_focusable(&self) -> bool {
        self.kind.is_control() && !self.disabled && !self.hidden
    }
}

/// The rendered form
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    index: HashMap<String, ElementRef>,
    focused: Option<ElementRef>,
    scrolled_to: Option<ElementRef>,
}

impl Document {
    /// Build a document from elements in document order
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), ElementRef(i)))
            .collect();
        Self {
            elements,
            index,
            focused: None,
            scrolled_to: None,
        }
    }

    /// The standard survey form layout
    pub fn survey() -> Self {
        let mut elements = vec![
            Element::new(FORM_ID, ElementKind::Form).label("Household Expense Survey"),
            Element::new(AGE_ID, ElementKind::NumberInput)
                .label("Age")
                .placeholder("Enter your age")
                .tooltip("You must be between 18 and 120 years old"),
            Element::new(GENDER_ID, ElementKind::Select(gender_options())).label("Gender"),
            Element::new(TOTAL_INCOME_ID, ElementKind::NumberInput)
                .label("Total Monthly Income ($)")
                .placeholder("Enter your total monthly income")
                .tooltip("Your combined monthly income before expenses"),
        ];

        for category in ExpenseCategory::ALL {
            elements.push(
                Element::new(category.checkbox_id(), ElementKind::Checkbox)
                    .label(category.label()),
            );
            elements.push(
                Element::new(category.amount_id(), ElementKind::NumberInput)
                    .label(format!("{} Amount ($)", category.label()))
                    .placeholder("0.00")
                    .disabled(true),
            );
        }

        elements.extend([
            Element::new(SUMMARY_CARD_ID, ElementKind::Container)
                .label("Monthly Summary")
                .hidden(true),
            Element::new(SUMMARY_INCOME_ID, ElementKind::Text).label("Income"),
            Element::new(SUMMARY_EXPENSES_ID, ElementKind::Text).label("Expenses"),
            Element::new(SUMMARY_BALANCE_ID, ElementKind::Text).label("Balance"),
            Element::new(SUMMARY_RATIO_ID, ElementKind::Text).label("Expense Ratio"),
        ]);

        Self::from_elements(elements)
    }

    /// Remove an element by id, returning the rebuilt document
    ///
    /// Handles resolved against the old document are invalidated.
    pub fn without(self, id: &str) -> Self {
        let elements = self.elements.into_iter().filter(|e| e.id != id).collect();
        Self::from_elements(elements)
    }

    /// Resolve an element id
    pub fn lookup(&self, id: &str) -> Option<ElementRef> {
        self.index.get(id).copied()
    }

    pub fn get(&self, target: ElementRef) -> &Element {
        &self.elements[target.0]
    }

    pub fn get_mut(&mut self, target: ElementRef) -> &mut Element {
        &mut self.elements[target.0]
    }

    /// Find an element by id
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.lookup(id).map(|r| self.get(r))
    }

    /// Elements in document order
    pub fn elements(&self) -> impl Iterator<Item = (ElementRef, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementRef(i), e))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// First element in document order carrying `marker`
    pub fn first_with_marker(&self, marker: Marker) -> Option<ElementRef> {
        self.elements()
            .find(|(_, e)| e.has_marker(marker))
            .map(|(r, _)| r)
    }

    /// First element in document order carrying `marker` that can take focus
    pub fn first_focusable_with_marker(&self, marker: Marker) -> Option<ElementRef> {
        self.elements()
            .find(|(_, e)| e.has_marker(marker) && e.is_focusable())
            .map(|(r, _)| r)
    }

    /// Element holding input focus
    pub fn focused(&self) -> Option<ElementRef> {
        self.focused
    }

    /// Element most recently scrolled into view
    pub fn scrolled_to(&self) -> Option<ElementRef> {
        self.scrolled_to
    }
}

fn gender_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: String::new(),
        label: "Select Gender".into(),
    }];
    options.extend(Gender::ALL.into_iter().map(|g| SelectOption {
        value: g.value().into(),
        label: g.label().into(),
    }));
    options
}

impl RenderSurface for Document {
    fn apply_op(&mut self, op: &PatchOp) {
        match op {
            PatchOp::SetDisabled { target, disabled } => {
                self.get_mut(*target).disabled = *disabled;
            }
            PatchOp::SetValue { target, value } => {
                let element = self.get_mut(*target);
                // Selects only hold one of their options
                let accepted = match &element.kind {
                    ElementKind::Select(options) => options.iter().any(|o| &o.value == value),
                    _ => true,
                };
                element.value = if accepted { value.clone() } else { String::new() };
            }
            PatchOp::SetChecked { target, checked } => {
                self.get_mut(*target).checked = *checked;
            }
            // Disabled or hidden controls cannot take focus
            PatchOp::Focus(target) => {
                if self.get(*target).is_focusable() {
                    self.focused = Some(*target);
                }
            }
            PatchOp::ScrollIntoView(target) => {
                self.scrolled_to = Some(*target);
            }
            PatchOp::AddMarker { target, marker } => {
                self.get_mut(*target).markers.insert(*marker);
            }
            PatchOp::RemoveMarker { target, marker } => {
                self.get_mut(*target).markers.remove(marker);
            }
            PatchOp::AddContainerMarker { target, marker } => {
                self.get_mut(*target).container_markers.insert(*marker);
            }
            PatchOp::RemoveContainerMarker { target, marker } => {
                self.get_mut(*target).container_markers.remove(marker);
            }
            PatchOp::SetFeedback { target, message } => {
                self.get_mut(*target).feedback = message.clone();
            }
            PatchOp::SetText { target, text } => {
                self.get_mut(*target).value = text.clone();
            }
            PatchOp::SetStyling { target, styling } => {
                self.get_mut(*target).styling = Some(*styling);
            }
            PatchOp::Show { target, transition } => {
                let element = self.get_mut(*target);
                element.hidden = false;
                if let Some(Transition::FadeIn) = transition {
                    element.markers.insert(Marker::FadeIn);
                }
            }
            PatchOp::Hide(target) => {
                self.get_mut(*target).hidden = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_layout() {
        let document = Document::survey();
        assert!(document.lookup("surveyForm").is_some());
        assert!(document.lookup("total_income").is_some());
        for category in ExpenseCategory::ALL {
            let amount = document.find(&category.amount_id()).unwrap();
            assert!(amount.disabled);
            assert!(document.lookup(&category.checkbox_id()).is_some());
        }
        assert!(document.find(SUMMARY_CARD_ID).unwrap().hidden);
        assert_eq!(document.find("gender").unwrap().options().len(), 5);
    }

    #[test]
    fn test_without_rebuilds_index() {
        let document = Document::survey().without("age");
        assert!(document.lookup("age").is_none());
        let gender = document.lookup("gender").unwrap();
        assert_eq!(document.get(gender).id, "gender");
    }

    #[test]
    fn test_select_rejects_unknown_value() {
        let mut document = Document::survey();
        let gender = document.lookup("gender").unwrap();

        document.apply_op(&PatchOp::SetValue {
            target: gender,
            value: "female".into(),
        });
        assert_eq!(document.get(gender).value, "female");

        document.apply_op(&PatchOp::SetValue {
            target: gender,
            value: "unknown".into(),
        });
        assert_eq!(document.get(gender).value, "");
    }

    #[test]
    fn test_first_with_marker_uses_document_order() {
        let mut document = Document::survey();
        let income = document.lookup("total_income").unwrap();
        let age = document.lookup("age").unwrap();

        document.apply_op(&PatchOp::AddMarker {
            target: income,
            marker: Marker::Invalid,
        });
        document.apply_op(&PatchOp::AddMarker {
            target: age,
            marker: Marker::Invalid,
        });

        assert_eq!(document.first_with_marker(Marker::Invalid), Some(age));
    }

    #[test]
    fn test_focus_skips_disabled_controls() {
        let mut document = Document::survey();
        let age = document.lookup("age").unwrap();
        let utilities = document.lookup("utilities_amount").unwrap();

        document.apply_op(&PatchOp::Focus(age));
        document.apply_op(&PatchOp::SetDisabled {
            target: utilities,
            disabled: true,
        });
        document.apply_op(&PatchOp::Focus(utilities));
        assert_eq!(document.focused(), Some(age));

        for target in [utilities, age] {
            document.apply_op(&PatchOp::AddMarker {
                target,
                marker: Marker::Invalid,
            });
        }
        assert_eq!(document.first_with_marker(Marker::Invalid), Some(age));
        document.apply_op(&PatchOp::RemoveMarker {
            target: age,
            marker: Marker::Invalid,
        });
        assert_eq!(document.first_with_marker(Marker::Invalid), Some(utilities));
        assert_eq!(document.first_focusable_with_marker(Marker::Invalid), None);
    }

    #[test]
    fn test_show_with_fade_in() {
        let mut document = Document::survey();
        let card = document.lookup(SUMMARY_CARD_ID).unwrap();

        document.apply_op(&PatchOp::Show {
            target: card,
            transition: Some(Transition::FadeIn),
        });
        let element = document.get(card);
        assert!(!element.hidden);
        assert!(element.has_marker(Marker::FadeIn));
    }

    #[test]
    fn test_styling_class_names() {
        assert_eq!(Styling::plain(Tone::Success).class_name(), "text-success");
        assert_eq!(Styling::bold(Tone::Danger).class_name(), "text-danger fw-bold");
    }
}
