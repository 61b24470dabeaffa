use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use tempfile::TempDir;

fn survey(dir: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("survey")?;
    cmd.env("SURVEY_FORM_DATA_DIR", dir.path())
        .env("SURVEY_FORM_LOG", "off");
    Ok(cmd)
}

#[test]
fn check_valid_survey_prints_summary() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    survey(&dir)?
        .args([
            "check",
            "--age",
            "34",
            "--gender",
            "female",
            "--income",
            "1000",
            "--expense",
            "utilities=200",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("$1,000.00")
                .and(predicate::str::contains("$800.00"))
                .and(predicate::str::contains("20.0%"))
                .and(predicate::str::contains("All checks passed.")),
        );
    Ok(())
}

#[test]
fn check_without_expense_is_blocked() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    survey(&dir)?
        .args(["check", "--age", "34", "--gender", "male", "--income", "1000"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Please select at least one expense category",
        ));
    Ok(())
}

#[test]
fn check_reports_every_failing_rule() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    survey(&dir)?
        .args(["check", "--age", "17", "--income", "0", "--expense", "shopping=0"])
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("Age must be between 18 and 120")
                .and(predicate::str::contains("Please select your gender"))
                .and(predicate::str::contains("Total income must be a positive number"))
                .and(predicate::str::contains("Please enter a valid amount for shopping")),
        );
    Ok(())
}

#[test]
fn check_writes_csv_response() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("response.csv");
    survey(&dir)?
        .args([
            "check",
            "--age",
            "40",
            "--gender",
            "other",
            "--income",
            "500",
            "--expense",
            "healthcare=600",
            "--format",
            "csv",
            "--output",
        ])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: expenses exceed income"));

    let contents = std::fs::read_to_string(&output)?;
    assert!(contents.starts_with("user_id,age,gender,total_income"));
    assert!(contents.contains(",40,other,500,"));
    Ok(())
}

#[test]
fn check_rejects_unknown_category() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    survey(&dir)?
        .args(["check", "--expense", "rent=100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown expense category"));
    Ok(())
}

#[test]
fn init_writes_config() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    survey(&dir)?
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());

    survey(&dir)?
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Output format:    Json")
                .and(predicate::str::contains("survey.log")),
        );
    Ok(())
}

#[test]
fn check_blocks_infinite_income() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    survey(&dir)?
        .args([
            "check",
            "--age",
            "34",
            "--gender",
            "female",
            "--income",
            "Infinity",
            "--expense",
            "utilities=10",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Total income must be a positive number",
        ));
    Ok(())
}
