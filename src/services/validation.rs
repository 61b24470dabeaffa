//! Field-level and whole-form validation
//!
//! Field-level rules run when a field loses focus. Whole-form validation runs
//! on a submit attempt, adds the "at least one expense" rule, and collects
//! an advisory message for every failing rule.

use thiserror::Error;

use crate::document::{Element, ElementRef, FormSchema, Marker, Patch, PatchOp};
use crate::models::number::{parse_float, parse_int};
use crate::models::{ExpenseCategory, FieldKey, FormState};

/// Youngest accepted respondent
pub const MIN_AGE: i64 = 18;
/// Oldest accepted respondent
pub const MAX_AGE: i64 = 120;

/// A failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("Age must be between 18 and 120")]
    AgeOutOfRange,

    #[error("Please select your gender")]
    GenderMissing,

    #[error("Total income must be a positive number")]
    IncomeNotPositive,

    #[error("Please enter a valid amount for {}", .0.message_name())]
    InvalidAmount(ExpenseCategory),

    #[error("Please select at least one expense category")]
    NoExpenseSelected,
}

impl ValidationIssue {
    /// The field this issue belongs to, if it is tied to one
    pub fn field(&self) -> Option<FieldKey> {
        match self {
            Self::AgeOutOfRange => Some(FieldKey::Age),
            Self::GenderMissing => Some(FieldKey::Gender),
            Self::IncomeNotPositive => Some(FieldKey::TotalIncome),
            Self::InvalidAmount(c) => Some(FieldKey::ExpenseAmount(*c)),
            Self::NoExpenseSelected => None,
        }
    }

    /// Issue raised when `key` fails its field-level rule
    pub fn for_field(key: FieldKey) -> Option<Self> {
        match key {
            FieldKey::Age => Some(Self::AgeOutOfRange),
            FieldKey::Gender => Some(Self::GenderMissing),
            FieldKey::TotalIncome => Some(Self::IncomeNotPositive),
            FieldKey::ExpenseAmount(c) => Some(Self::InvalidAmount(c)),
            FieldKey::ExpenseCheck(_) => None,
        }
    }
}

/// Validation state of a field, read from its markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidity {
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

impl FieldValidity {
    pub fn of(element: &Element) -> Self {
        if element.has_marker(Marker::Invalid) {
            Self::Invalid
        } else if element.has_marker(Marker::Valid) {
            Self::Valid
        } else {
            Self::Unvalidated
        }
    }
}

/// How advisory messages reach the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageDisplay {
    /// Keep messages in the report only
    #[default]
    Accumulate,
    /// Also attach each message next to its field
    Inline,
}

fn age_is_valid(value: &str) -> bool {
    parse_int(value).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age))
}

fn positive(value: &str) -> bool {
    parse_float(value).is_some_and(|v| v.is_finite() && v > 0.0)
}

/// Apply the field-level rule for `key` to `value`
///
/// Checkboxes have no rule and are always valid.
pub fn validate_field(key: FieldKey, value: &str) -> bool {
    match key {
        FieldKey::Age => age_is_valid(value),
        FieldKey::Gender => !value.is_empty(),
        FieldKey::TotalIncome => positive(value),
        FieldKey::ExpenseAmount(_) => value.is_empty() || positive(value),
        FieldKey::ExpenseCheck(_) => true,
    }
}

/// Result of whole-form validation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    /// Every field checked, in check order, with its outcome
    pub checks: Vec<(FieldKey, bool)>,
    /// Advisory messages for failing rules, in check order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether submission may proceed
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Messages for every failing rule
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Outcome recorded for a field, if it was checked
    pub fn outcome(&self, key: FieldKey) -> Option<bool> {
        self.checks
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, ok)| *ok)
    }

    /// First field that failed, in check order
    pub fn first_invalid_field(&self) -> Option<FieldKey> {
        self.checks.iter().find(|(_, ok)| !ok).map(|(key, _)| *key)
    }

    /// Issue recorded for a field
    pub fn issue_for(&self, key: FieldKey) -> Option<&ValidationIssue> {
        self.issues.iter().find(|i| i.field() == Some(key))
    }

    /// Visual changes marking every checked field
    pub fn to_patch(&self, schema: &FormSchema, display: MessageDisplay) -> Patch {
        let mut patch = Patch::new();
        for (key, ok) in &self.checks {
            let Some(target) = schema.field(*key) else {
                continue;
            };
            if *ok {
                patch.extend(mark_valid(target));
            } else {
                let message = match display {
                    MessageDisplay::Inline => self.issue_for(*key).map(ToString::to_string),
                    MessageDisplay::Accumulate => None,
                };
                patch.extend(mark_invalid(target, message.as_deref()));
            }
        }
        patch
    }

    fn record(&mut self, key: FieldKey, ok: bool, issue: ValidationIssue) {
        self.checks.push((key, ok));
        if !ok {
            self.issues.push(issue);
        }
    }
}

/// Validate the whole form
///
/// Fields absent from the snapshot are skipped. Checked categories must
/// carry a positive amount, and at least one category must be checked.
pub fn validate_form(state: &FormState) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(age) = &state.age {
        report.record(FieldKey::Age, age_is_valid(age), ValidationIssue::AgeOutOfRange);
    }

    if let Some(gender) = &state.gender {
        report.record(
            FieldKey::Gender,
            !gender.is_empty(),
            ValidationIssue::GenderMissing,
        );
    }

    if let Some(income) = &state.total_income {
        report.record(
            FieldKey::TotalIncome,
            positive(income),
            ValidationIssue::IncomeNotPositive,
        );
    }

    for (category, input) in state.expenses.iter().filter(|(_, e)| e.checked) {
        report.record(
            FieldKey::ExpenseAmount(*category),
            positive(&input.amount),
            ValidationIssue::InvalidAmount(*category),
        );
    }

    if !state.has_checked_expense() {
        report.issues.push(ValidationIssue::NoExpenseSelected);
    }

    report
}

/// Mark a field valid, removing any invalid marker and message
pub fn mark_valid(target: ElementRef) -> Patch {
    [
        PatchOp::RemoveMarker {
            target,
            marker: Marker::Invalid,
        },
        PatchOp::AddMarker {
            target,
            marker: Marker::Valid,
        },
        PatchOp::SetFeedback {
            target,
            message: None,
        },
    ]
    .into_iter()
    .collect()
}

/// Mark a field invalid, attaching `message` next to it when given
pub fn mark_invalid(target: ElementRef, message: Option<&str>) -> Patch {
    let mut patch: Patch = [
        PatchOp::RemoveMarker {
            target,
            marker: Marker::Valid,
        },
        PatchOp::AddMarker {
            target,
            marker: Marker::Invalid,
        },
    ]
    .into_iter()
    .collect();

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        patch.push(PatchOp::SetFeedback {
            target,
            message: Some(message.to_string()),
        });
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, RenderSurface};
    use crate::models::ExpenseInput;

    fn valid_state() -> FormState {
        FormState::default()
            .with_age("35")
            .with_gender("female")
            .with_income("3000")
            .with_expense(ExpenseCategory::Utilities, "150")
    }

    #[test]
    fn test_age_bounds() {
        assert!(!validate_field(FieldKey::Age, "17"));
        assert!(validate_field(FieldKey::Age, "18"));
        assert!(validate_field(FieldKey::Age, "120"));
        assert!(!validate_field(FieldKey::Age, "121"));
        assert!(!validate_field(FieldKey::Age, ""));
        assert!(!validate_field(FieldKey::Age, "old"));
        assert!(validate_field(FieldKey::Age, "30.7"));
    }

    #[test]
    fn test_gender_and_income_rules() {
        assert!(!validate_field(FieldKey::Gender, ""));
        assert!(validate_field(FieldKey::Gender, "other"));

        assert!(validate_field(FieldKey::TotalIncome, "2500.50"));
        assert!(!validate_field(FieldKey::TotalIncome, "0"));
        assert!(!validate_field(FieldKey::TotalIncome, "-10"));
        assert!(!validate_field(FieldKey::TotalIncome, "lots"));
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let expense = FieldKey::ExpenseAmount(ExpenseCategory::Utilities);
        for value in ["Infinity", "1e400", "-Infinity"] {
            assert!(!validate_field(FieldKey::TotalIncome, value), "{}", value);
            assert!(!validate_field(expense, value), "{}", value);
        }
        assert!(validate_field(FieldKey::TotalIncome, "1e300"));
    }

    #[test]
    fn test_expense_amount_rule() {
        let key = FieldKey::ExpenseAmount(ExpenseCategory::Shopping);
        assert!(validate_field(key, ""));
        assert!(validate_field(key, "49.99"));
        assert!(!validate_field(key, "0"));
        assert!(!validate_field(key, "-5"));
        assert!(!validate_field(key, " "));
    }

    #[test]
    fn test_valid_form() {
        let report = validate_form(&valid_state());
        assert!(report.is_valid());
        assert_eq!(report.checks.len(), 4);
    }

    #[test]
    fn test_no_expense_selected() {
        let state = FormState::default()
            .with_age("35")
            .with_gender("male")
            .with_income("3000")
            .with_expense_input(ExpenseCategory::Shopping, ExpenseInput::default());

        let report = validate_form(&state);
        assert!(!report.is_valid());
        assert_eq!(report.issues, vec![ValidationIssue::NoExpenseSelected]);
        assert!(report.checks.iter().all(|(_, ok)| *ok));
    }

    #[test]
    fn test_checked_expense_needs_positive_amount() {
        let state = valid_state().with_expense(ExpenseCategory::SchoolFees, "");

        let report = validate_form(&state);
        assert_eq!(
            report.issues,
            vec![ValidationIssue::InvalidAmount(ExpenseCategory::SchoolFees)]
        );
        assert_eq!(
            report.messages(),
            vec!["Please enter a valid amount for school fees".to_string()]
        );
        assert_eq!(
            report.outcome(FieldKey::ExpenseAmount(ExpenseCategory::SchoolFees)),
            Some(false)
        );
        assert_eq!(
            report.first_invalid_field(),
            Some(FieldKey::ExpenseAmount(ExpenseCategory::SchoolFees))
        );
    }

    #[test]
    fn test_messages_accumulate_in_order() {
        let state = FormState::default()
            .with_age("12")
            .with_gender("")
            .with_income("0");

        let report = validate_form(&state);
        assert_eq!(
            report.messages(),
            vec![
                "Age must be between 18 and 120",
                "Please select your gender",
                "Total income must be a positive number",
                "Please select at least one expense category",
            ]
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let state = FormState::default().with_expense(ExpenseCategory::Healthcare, "80");
        let report = validate_form(&state);
        assert!(report.is_valid());
        assert_eq!(report.outcome(FieldKey::Age), None);
    }

    #[test]
    fn test_mark_transitions() {
        let mut document = Document::survey();
        let age = document.lookup("age").unwrap();
        assert_eq!(FieldValidity::of(document.get(age)), FieldValidity::Unvalidated);

        document.apply(&mark_invalid(age, Some("Age must be between 18 and 120")));
        let element = document.get(age);
        assert_eq!(FieldValidity::of(element), FieldValidity::Invalid);
        assert_eq!(
            element.feedback.as_deref(),
            Some("Age must be between 18 and 120")
        );

        document.apply(&mark_valid(age));
        let element = document.get(age);
        assert_eq!(FieldValidity::of(element), FieldValidity::Valid);
        assert!(!element.has_marker(Marker::Invalid));
        assert_eq!(element.feedback, None);
    }

    #[test]
    fn test_mark_invalid_without_message_keeps_feedback_absent() {
        let mut document = Document::survey();
        let income = document.lookup("total_income").unwrap();

        document.apply(&mark_invalid(income, None));
        assert_eq!(document.get(income).feedback, None);
    }

    #[test]
    fn test_report_patch_message_display() {
        let document = Document::survey();
        let schema = FormSchema::bind(&document);
        let report = validate_form(&FormState::default().with_age("5"));

        let age = schema.age().unwrap();
        let inline = report.to_patch(&schema, MessageDisplay::Inline);
        assert!(inline.ops().contains(&PatchOp::SetFeedback {
            target: age,
            message: Some("Age must be between 18 and 120".into()),
        }));

        let accumulated = report.to_patch(&schema, MessageDisplay::Accumulate);
        assert!(!accumulated
            .ops()
            .iter()
            .any(|op| matches!(op, PatchOp::SetFeedback { .. })));
    }
}
