//! Form state value object
//!
//! A `FormState` is a snapshot of the field values the survey logic reads.
//! It is captured fresh from the document on every event; nothing derived
//! from it is kept between events.

use std::collections::BTreeMap;

use super::category::ExpenseCategory;
use crate::document::{Document, FormSchema};

/// Input state of one expense category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseInput {
    /// Whether the category checkbox is checked
    pub checked: bool,
    /// Whether the amount field is editable
    pub enabled: bool,
    /// Raw amount text
    pub amount: String,
}

/// Snapshot of the survey fields
///
/// `None` means the element is absent from the document. Only categories
/// bound by the schema appear in `expenses`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub total_income: Option<String>,
    pub expenses: BTreeMap<ExpenseCategory, ExpenseInput>,
}

impl FormState {
    /// Capture the current values of every bound field
    pub fn capture(document: &Document, schema: &FormSchema) -> Self {
        let read = |target: Option<_>| target.map(|r| document.get(r).value.clone());

        let expenses = schema
            .expenses()
            .iter()
            .map(|binding| {
                let checkbox = document.get(binding.checkbox);
                let amount = document.get(binding.amount);
                (
                    binding.category,
                    ExpenseInput {
                        checked: checkbox.checked,
                        enabled: !amount.disabled,
                        amount: amount.value.clone(),
                    },
                )
            })
            .collect();

        Self {
            age: read(schema.age()),
            gender: read(schema.gender()),
            total_income: read(schema.total_income()),
            expenses,
        }
    }

    /// Set the age text
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Set the gender selection
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Set the income text
    pub fn with_income(mut self, income: impl Into<String>) -> Self {
        self.total_income = Some(income.into());
        self
    }

    /// Add a checked, enabled expense category with an amount
    pub fn with_expense(mut self, category: ExpenseCategory, amount: impl Into<String>) -> Self {
        self.expenses.insert(
            category,
            ExpenseInput {
                checked: true,
                enabled: true,
                amount: amount.into(),
            },
        );
        self
    }

    /// Add an expense category with explicit input state
    pub fn with_expense_input(mut self, category: ExpenseCategory, input: ExpenseInput) -> Self {
        self.expenses.insert(category, input);
        self
    }

    /// Whether any expense category is checked
    pub fn has_checked_expense(&self) -> bool {
        self.expenses.values().any(|e| e.checked)
    }
}
