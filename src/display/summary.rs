//! Summary and validation formatting for terminal output

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::currency::{format_percentage, CurrencyFormat};
use crate::services::{Summary, ValidationReport};
use crate::submission::SurveyResponse;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl SummaryRow {
    fn new(item: impl Into<String>, amount: String) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

/// Format the income/expense summary as a table
pub fn format_summary(summary: &Summary, currency: &CurrencyFormat) -> String {
    if !summary.is_visible() {
        return "No income or expenses entered.".to_string();
    }

    let mut rows = vec![SummaryRow::new("Income", currency.format(summary.income))];
    rows.extend(summary.included.iter().map(|(category, amount)| {
        SummaryRow::new(format!("  {}", category.label()), currency.format(*amount))
    }));
    rows.push(SummaryRow::new(
        "Total Expenses",
        currency.format(summary.total_expenses),
    ));
    rows.push(SummaryRow::new("Balance", currency.format(summary.balance)));
    rows.push(SummaryRow::new("Expense Ratio", format_percentage(summary.ratio)));

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Format the outcome of whole-form validation
pub fn format_issues(report: &ValidationReport) -> String {
    if report.is_valid() {
        return "All checks passed.".to_string();
    }

    let mut output = String::from("Submission blocked:\n");
    for message in report.messages() {
        output.push_str(&format!("  - {}\n", message));
    }
    output
}

/// Format the derived metrics of a completed response
pub fn format_response(response: &SurveyResponse, currency: &CurrencyFormat) -> String {
    let mut output = String::new();
    output.push_str(&format!("Response:         {}\n", response.response_id));
    output.push_str(&format!(
        "Savings:          {}\n",
        currency.format(response.savings())
    ));
    if let Some((category, amount)) = response.highest_expense_category() {
        output.push_str(&format!(
            "Largest expense:  {} ({})\n",
            category.label(),
            currency.format(amount)
        ));
    }
    output.push_str(&format!(
        "Health score:     {}/100\n",
        response.financial_health_score()
    ));
    if response.is_overspending() {
        output.push_str("Warning: expenses exceed income\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, FormState};
    use crate::services::{compute_summary, validate_form};

    #[test]
    fn test_format_summary_table() {
        let state = FormState::default()
            .with_income("1000")
            .with_expense(ExpenseCategory::Utilities, "200");
        let output = format_summary(&compute_summary(&state), &CurrencyFormat::default());

        assert!(output.contains("Income"));
        assert!(output.contains("$1,000.00"));
        assert!(output.contains("Utilities"));
        assert!(output.contains("$800.00"));
        assert!(output.contains("20.0%"));
    }

    #[test]
    fn test_format_empty_summary() {
        let output = format_summary(&Summary::default(), &CurrencyFormat::default());
        assert_eq!(output, "No income or expenses entered.");
    }

    #[test]
    fn test_format_issues() {
        let report = validate_form(&FormState::default().with_age("15"));
        let output = format_issues(&report);
        assert!(output.starts_with("Submission blocked:"));
        assert!(output.contains("  - Age must be between 18 and 120"));
        assert!(output.contains("  - Please select at least one expense category"));
    }
}
