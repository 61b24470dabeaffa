//! Typed form schema
//!
//! Resolves every element id the survey logic depends on once, when the
//! controller starts. Missing elements are logged and the work that needs
//! them is skipped; `require_complete` turns any gap into an error.

use tracing::warn;

use super::{
    Document, ElementRef, SUMMARY_BALANCE_ID, SUMMARY_CARD_ID, SUMMARY_EXPENSES_ID,
    SUMMARY_INCOME_ID, SUMMARY_RATIO_ID,
};
use crate::error::{SurveyError, SurveyResult};
use crate::models::field::{AGE_ID, FORM_ID, GENDER_ID, TOTAL_INCOME_ID};
use crate::models::{ExpenseCategory, FieldKey};

/// Checkbox and amount input of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseBinding {
    pub category: ExpenseCategory,
    pub checkbox: ElementRef,
    pub amount: ElementRef,
}

/// Summary container and its display elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryBinding {
    pub card: ElementRef,
    pub income: Option<ElementRef>,
    pub expenses: Option<ElementRef>,
    pub balance: Option<ElementRef>,
    pub ratio: Option<ElementRef>,
}

/// Resolved element handles for the survey form
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    form: Option<ElementRef>,
    age: Option<ElementRef>,
    gender: Option<ElementRef>,
    total_income: Option<ElementRef>,
    expenses: Vec<ExpenseBinding>,
    summary: Option<SummaryBinding>,
    missing: Vec<String>,
}

impl FormSchema {
    /// Resolve the schema against a document
    pub fn bind(document: &Document) -> Self {
        let mut missing = Vec::new();
        let mut resolve = |id: &str| {
            let found = document.lookup(id);
            if found.is_none() {
                warn!(element = id, "survey element missing from document");
                missing.push(id.to_string());
            }
            found
        };

        let form = resolve(FORM_ID);
        let age = resolve(AGE_ID);
        let gender = resolve(GENDER_ID);
        let total_income = resolve(TOTAL_INCOME_ID);

        let expenses = ExpenseCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let checkbox = resolve(&category.checkbox_id());
                let amount = resolve(&category.amount_id());
                Some(ExpenseBinding {
                    category,
                    checkbox: checkbox?,
                    amount: amount?,
                })
            })
            .collect();

        let summary = resolve(SUMMARY_CARD_ID).map(|card| SummaryBinding {
            card,
            income: resolve(SUMMARY_INCOME_ID),
            expenses: resolve(SUMMARY_EXPENSES_ID),
            balance: resolve(SUMMARY_BALANCE_ID),
            ratio: resolve(SUMMARY_RATIO_ID),
        });

        Self {
            form,
            age,
            gender,
            total_income,
            expenses,
            summary,
            missing,
        }
    }

    /// Fail if any element was missing
    pub fn require_complete(&self) -> SurveyResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(SurveyError::Schema {
                missing: self.missing.clone(),
            })
        }
    }

    /// Ids that could not be resolved
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn form(&self) -> Option<ElementRef> {
        self.form
    }

    pub fn age(&self) -> Option<ElementRef> {
        self.age
    }

    pub fn gender(&self) -> Option<ElementRef> {
        self.gender
    }

    pub fn total_income(&self) -> Option<ElementRef> {
        self.total_income
    }

    /// Categories whose checkbox and amount input both exist
    pub fn expenses(&self) -> &[ExpenseBinding] {
        &self.expenses
    }

    pub fn expense(&self, category: ExpenseCategory) -> Option<&ExpenseBinding> {
        self.expenses.iter().find(|b| b.category == category)
    }

    pub fn summary(&self) -> Option<&SummaryBinding> {
        self.summary.as_ref()
    }

    /// Element handle of a field
    pub fn field(&self, key: FieldKey) -> Option<ElementRef> {
        match key {
            FieldKey::Age => self.age,
            FieldKey::Gender => self.gender,
            FieldKey::TotalIncome => self.total_income,
            FieldKey::ExpenseCheck(c) => self.expense(c).map(|b| b.checkbox),
            FieldKey::ExpenseAmount(c) => self.expense(c).map(|b| b.amount),
        }
    }

    /// Field a handle belongs to
    pub fn field_for(&self, target: ElementRef) -> Option<FieldKey> {
        if self.age == Some(target) {
            return Some(FieldKey::Age);
        }
        if self.gender == Some(target) {
            return Some(FieldKey::Gender);
        }
        if self.total_income == Some(target) {
            return Some(FieldKey::TotalIncome);
        }
        self.expenses.iter().find_map(|b| {
            if b.checkbox == target {
                Some(FieldKey::ExpenseCheck(b.category))
            } else if b.amount == target {
                Some(FieldKey::ExpenseAmount(b.category))
            } else {
                None
            }
        })
    }
}
