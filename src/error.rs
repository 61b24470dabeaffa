//! Custom error types for the survey form
//!
//! Form logic itself never fails: bad input degrades to defaults. These errors
//! cover the surrounding concerns (configuration, output, schema binding, TUI).

use thiserror::Error;

/// The main error type for survey-form operations
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV output errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// The rendered document does not match the form schema
    #[error("Form schema mismatch, missing elements: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Submitted form data could not be turned into a survey response
    #[error("Submission error: {0}")]
    Submission(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SurveyError {
    /// Create a submission error for a field that did not parse
    pub fn bad_field(field: &str, value: &str) -> Self {
        Self::Submission(format!("invalid value for '{}': '{}'", field, value))
    }

    /// Check if this is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

impl From<std::io::Error> for SurveyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SurveyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SurveyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for survey-form operations
pub type SurveyResult<T> = Result<T, SurveyError>;
