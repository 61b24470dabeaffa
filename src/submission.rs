//! Form submission
//!
//! A successful submit posts the current control values the way a native
//! form would. `SurveyResponse` is the typed record built from that data,
//! written out as JSON or CSV for whatever consumes the survey.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Document, ElementKind};
use crate::error::{SurveyError, SurveyResult};
use crate::models::field::{AGE_ID, GENDER_ID, TOTAL_INCOME_ID};
use crate::models::number::{parse_float, parse_int};
use crate::models::{ExpenseCategory, Gender};

/// Value posted by a checked checkbox
pub const CHECKED_VALUE: &str = "y";

/// Name/value pairs posted by the form, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    /// Collect posted values: disabled controls and unchecked boxes are left out
    pub fn collect(document: &Document) -> Self {
        let fields = document
            .elements()
            .filter(|(_, e)| e.kind.is_control() && !e.disabled)
            .filter_map(|(_, e)| match e.kind {
                ElementKind::Checkbox if e.checked => {
                    Some((e.id.clone(), CHECKED_VALUE.to_string()))
                }
                ElementKind::Checkbox => None,
                _ => Some((e.id.clone(), e.value.clone())),
            })
            .collect();
        Self { fields }
    }

    /// Build form data from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// A completed survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub response_id: Uuid,
    pub age: u32,
    pub gender: Gender,
    pub total_income: f64,
    /// Every category; unselected ones are 0
    pub expenses: BTreeMap<ExpenseCategory, f64>,
    pub created_at: DateTime<Utc>,
}

impl SurveyResponse {
    /// Build a response from posted form data
    pub fn from_form_data(data: &FormData) -> SurveyResult<Self> {
        let required = |name: &str| {
            data.get(name)
                .ok_or_else(|| SurveyError::Submission(format!("missing field '{}'", name)))
        };

        let age_text = required(AGE_ID)?;
        let age = parse_int(age_text)
            .filter(|a| (0..=150).contains(a))
            .and_then(|a| u32::try_from(a).ok())
            .ok_or_else(|| SurveyError::bad_field(AGE_ID, age_text))?;

        let gender_text = required(GENDER_ID)?;
        let gender: Gender = gender_text
            .parse()
            .map_err(|_| SurveyError::bad_field(GENDER_ID, gender_text))?;

        let income_text = required(TOTAL_INCOME_ID)?;
        let total_income = parse_float(income_text)
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| SurveyError::bad_field(TOTAL_INCOME_ID, income_text))?;

        let mut expenses = BTreeMap::new();
        for category in ExpenseCategory::ALL {
            let amount = match (
                data.get(&category.checkbox_id()),
                data.get(&category.amount_id()),
            ) {
                (Some(_), Some(text)) if !text.trim().is_empty() => parse_float(text)
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| SurveyError::bad_field(&category.amount_id(), text))?,
                _ => 0.0,
            };
            expenses.insert(category, amount);
        }

        Ok(Self {
            response_id: Uuid::new_v4(),
            age,
            gender,
            total_income,
            expenses,
            created_at: Utc::now(),
        })
    }

    pub fn expense(&self, category: ExpenseCategory) -> f64 {
        self.expenses.get(&category).copied().unwrap_or(0.0)
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }

    /// Income left after expenses
    pub fn savings(&self) -> f64 {
        self.total_income - self.total_expenses()
    }

    /// Expenses as a percentage of income, 0 when there is no income
    pub fn expense_ratio(&self) -> f64 {
        if self.total_income == 0.0 {
            0.0
        } else {
            self.total_expenses() / self.total_income * 100.0
        }
    }

    /// Share of total expenses per category, in percent
    pub fn expense_breakdown(&self) -> BTreeMap<ExpenseCategory, f64> {
        let total = self.total_expenses();
        self.expenses
            .iter()
            .map(|(c, amount)| {
                let share = if total == 0.0 {
                    0.0
                } else {
                    amount / total * 100.0
                };
                (*c, share)
            })
            .collect()
    }

    /// Category with the largest amount
    pub fn highest_expense_category(&self) -> Option<(ExpenseCategory, f64)> {
        self.expenses
            .iter()
            .map(|(c, a)| (*c, *a))
            .fold(None, |best, (c, a)| match best {
                Some((_, best_amount)) if best_amount >= a => best,
                _ => Some((c, a)),
            })
    }

    pub fn is_overspending(&self) -> bool {
        self.total_expenses() > self.total_income
    }

    /// Coarse score from the expense ratio
    pub fn financial_health_score(&self) -> u8 {
        match self.expense_ratio() {
            r if r <= 50.0 => 100,
            r if r <= 70.0 => 80,
            r if r <= 90.0 => 60,
            r if r <= 100.0 => 40,
            _ => 20,
        }
    }
}

/// Output format for completed responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// CSV header for exported responses
pub const CSV_HEADER: [&str; 13] = [
    "user_id",
    "age",
    "gender",
    "total_income",
    "utilities",
    "entertainment",
    "school_fees",
    "shopping",
    "healthcare",
    "total_expenses",
    "savings",
    "expense_ratio",
    "created_at",
];

#[derive(Serialize)]
struct ResponseExport<'a> {
    #[serde(flatten)]
    response: &'a SurveyResponse,
    total_expenses: f64,
    savings: f64,
    expense_ratio: f64,
}

/// Write a response in the requested format
pub fn write_response<W: Write>(
    response: &SurveyResponse,
    format: OutputFormat,
    writer: &mut W,
) -> SurveyResult<()> {
    match format {
        OutputFormat::Json => {
            let export = ResponseExport {
                response,
                total_expenses: response.total_expenses(),
                savings: response.savings(),
                expense_ratio: response.expense_ratio(),
            };
            serde_json::to_writer_pretty(&mut *writer, &export)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.write_record(CSV_HEADER)?;

            let mut row = vec![
                response.response_id.to_string(),
                response.age.to_string(),
                response.gender.to_string(),
                response.total_income.to_string(),
            ];
            row.extend(
                ExpenseCategory::ALL
                    .into_iter()
                    .map(|c| response.expense(c).to_string()),
            );
            row.push(response.total_expenses().to_string());
            row.push(response.savings().to_string());
            row.push(response.expense_ratio().to_string());
            row.push(response.created_at.to_rfc3339());

            csv_writer.write_record(&row)?;
            csv_writer.flush()?;
        }
    }
    Ok(())
}
