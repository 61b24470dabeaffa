//! Headless survey check
//!
//! Fills the form from command-line values, firing the same events the
//! interactive form would, then attempts a submission.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::settings::Settings;
use crate::controller::{ControllerOptions, SubmitOutcome, SurveyController};
use crate::display::{format_issues, format_response, format_summary};
use crate::document::Document;
use crate::error::{SurveyError, SurveyResult};
use crate::models::field::{AGE_ID, GENDER_ID, TOTAL_INCOME_ID};
use crate::models::{ExpenseCategory, Gender};
use crate::submission::{write_response, OutputFormat, SurveyResponse};

/// Arguments for `survey check`
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// Gender (male, female, other, prefer_not_to_say)
    #[arg(long)]
    pub gender: Option<String>,

    /// Total monthly income
    #[arg(long)]
    pub income: Option<String>,

    /// Checked expense with its amount, e.g. "utilities=120.50" (repeatable)
    #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT", value_parser = parse_expense)]
    pub expenses: Vec<(ExpenseCategory, String)>,

    /// Print the completed response in this format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the completed response to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse a `category=amount` pair
pub fn parse_expense(s: &str) -> Result<(ExpenseCategory, String), String> {
    let (category, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got '{}'", s))?;
    Ok((category.parse()?, amount.trim().to_string()))
}

/// Drive a controller through the events for the given values
pub fn fill_controller(controller: &mut SurveyController, args: &CheckArgs) {
    if let Some(age) = &args.age {
        controller.set_value(AGE_ID, age);
        controller.blur(AGE_ID);
    }

    if let Some(gender) = &args.gender {
        let value = gender
            .parse::<Gender>()
            .map(|g| g.value().to_string())
            .unwrap_or_else(|_| gender.clone());
        controller.select(GENDER_ID, &value);
        controller.blur(GENDER_ID);
    }

    if let Some(income) = &args.income {
        controller.set_value(TOTAL_INCOME_ID, income);
        controller.blur(TOTAL_INCOME_ID);
    }

    for (category, amount) in &args.expenses {
        controller.set_checked(*category, true);
        let amount_id = category.amount_id();
        controller.set_value(&amount_id, amount);
        controller.blur(&amount_id);
    }
}

/// Handle `survey check`
pub fn handle_check_command(settings: &Settings, args: CheckArgs) -> SurveyResult<()> {
    let options = ControllerOptions::from_settings(settings);
    let mut controller = SurveyController::new(Document::survey(), options);
    fill_controller(&mut controller, &args);

    if let Some(summary) = controller.recompute_summary() {
        println!("{}", format_summary(&summary, controller.currency()));
    }

    match controller.submit() {
        SubmitOutcome::Blocked(report) => {
            print!("{}", format_issues(&report));
            Err(SurveyError::Submission(format!(
                "{} validation issue(s)",
                report.issues.len()
            )))
        }
        SubmitOutcome::Submitted(data) => {
            let response = SurveyResponse::from_form_data(&data)?;
            println!("{}", format_issues(&Default::default()));
            print!("{}", format_response(&response, controller.currency()));
            info!(response_id = %response.response_id, "survey checked");

            let format = args.format.unwrap_or(settings.output_format);
            if let Some(path) = &args.output {
                let mut file = File::create(path)?;
                write_response(&response, format, &mut file)?;
                println!("Response written to {}", path.display());
            } else if args.format.is_some() {
                write_response(&response, format, &mut io::stdout())?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FieldValidity;

    #[test]
    fn test_parse_expense() {
        assert_eq!(
            parse_expense("school fees=250"),
            Ok((ExpenseCategory::SchoolFees, "250".to_string()))
        );
        assert!(parse_expense("utilities").is_err());
        assert!(parse_expense("rent=100").is_err());
    }

    #[test]
    fn test_fill_controller_marks_fields() {
        let mut controller = SurveyController::new(Document::survey(), Default::default());
        let args = CheckArgs {
            age: Some("16".into()),
            gender: Some("Female".into()),
            income: Some("1000".into()),
            expenses: vec![(ExpenseCategory::Utilities, "200".into())],
            ..Default::default()
        };
        fill_controller(&mut controller, &args);

        let document = controller.document();
        let age = document.find(AGE_ID).unwrap();
        assert_eq!(FieldValidity::of(age), FieldValidity::Invalid);
        assert_eq!(document.find(GENDER_ID).unwrap().value, "female");
        assert_eq!(document.find("utilities_amount").unwrap().value, "200");
    }
}
