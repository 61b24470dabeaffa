//! Income/expense summary
//!
//! Recomputes totals from the current form state and describes how the
//! summary card should look. Nothing is cached between calls.

use std::collections::BTreeMap;

use crate::currency::{format_percentage, CurrencyFormat};
use crate::document::{Patch, PatchOp, Styling, SummaryBinding, Tone, Transition};
use crate::models::number::amount_or_zero;
use crate::models::{ExpenseCategory, FormState};

/// Ratio above which spending is flagged as a warning
pub const RATIO_WARNING_THRESHOLD: f64 = 80.0;
/// Ratio above which spending is flagged as danger
pub const RATIO_DANGER_THRESHOLD: f64 = 100.0;

/// Derived totals for the summary card
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub income: f64,
    /// Amounts of categories that are checked and enabled
    pub included: BTreeMap<ExpenseCategory, f64>,
    pub total_expenses: f64,
    pub balance: f64,
    /// Expenses as a percentage of income, 0 when there is no income
    pub ratio: f64,
}

impl Summary {
    /// Whether the summary card should be shown
    pub fn is_visible(&self) -> bool {
        self.income > 0.0 || self.total_expenses > 0.0
    }

    pub fn balance_styling(&self) -> Styling {
        if self.balance >= 0.0 {
            Styling::plain(Tone::Success)
        } else {
            Styling::plain(Tone::Danger)
        }
    }

    pub fn ratio_styling(&self) -> Styling {
        if self.ratio > RATIO_DANGER_THRESHOLD {
            Styling::bold(Tone::Danger)
        } else if self.ratio > RATIO_WARNING_THRESHOLD {
            Styling::bold(Tone::Warning)
        } else {
            Styling::plain(Tone::Success)
        }
    }
}

/// Compute the summary from a form snapshot
pub fn compute_summary(state: &FormState) -> Summary {
    let income = state.total_income.as_deref().map_or(0.0, amount_or_zero);

    let included: BTreeMap<_, _> = state
        .expenses
        .iter()
        .filter(|(_, input)| input.checked && input.enabled)
        .map(|(category, input)| (*category, amount_or_zero(&input.amount)))
        .collect();

    let total_expenses: f64 = included.values().sum();
    let balance = income - total_expenses;
    let ratio = if income > 0.0 {
        total_expenses / income * 100.0
    } else {
        0.0
    };

    Summary {
        income,
        included,
        total_expenses,
        balance,
        ratio,
    }
}

/// Describe the summary card for a computed summary
pub fn render_summary(
    summary: &Summary,
    binding: &SummaryBinding,
    currency: &CurrencyFormat,
) -> Patch {
    let mut patch = Patch::new();

    if !summary.is_visible() {
        patch.push(PatchOp::Hide(binding.card));
        return patch;
    }

    if let Some(target) = binding.income {
        patch.push(PatchOp::SetText {
            target,
            text: currency.format(summary.income),
        });
    }
    if let Some(target) = binding.expenses {
        patch.push(PatchOp::SetText {
            target,
            text: currency.format(summary.total_expenses),
        });
    }
    if let Some(target) = binding.balance {
        patch.push(PatchOp::SetText {
            target,
            text: currency.format(summary.balance),
        });
        patch.push(PatchOp::SetStyling {
            target,
            styling: summary.balance_styling(),
        });
    }
    if let Some(target) = binding.ratio {
        patch.push(PatchOp::SetText {
            target,
            text: format_percentage(summary.ratio),
        });
        patch.push(PatchOp::SetStyling {
            target,
            styling: summary.ratio_styling(),
        });
    }

    patch.push(PatchOp::Show {
        target: binding.card,
        transition: Some(Transition::FadeIn),
    });

    patch
}
