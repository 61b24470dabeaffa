//! User settings for the survey form
//!
//! Currency presentation, how validation messages are shown, tooltips,
//! logging verbosity and the default output format.

use serde::{Deserialize, Serialize};

use super::paths::SurveyPaths;
use crate::currency::CurrencyFormat;
use crate::error::SurveyError;
use crate::submission::OutputFormat;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used by the summary card
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Show each validation message next to its field
    #[serde(default)]
    pub inline_messages: bool,

    /// Show field hints in the status bar
    #[serde(default = "default_true")]
    pub show_tooltips: bool,

    /// Log filter used when `SURVEY_FORM_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Format of written responses
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: CurrencyFormat::default(),
            inline_messages: false,
            show_tooltips: true,
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &SurveyPaths) -> Result<Self, SurveyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SurveyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SurveyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SurveyPaths) -> Result<(), SurveyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SurveyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SurveyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
