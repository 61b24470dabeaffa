//! Path management for the survey form
//!
//! ## Path Resolution Order
//!
//! 1. `SURVEY_FORM_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `survey-form`
//!    (`~/.config/survey-form` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SurveyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SURVEY_FORM_DATA_DIR";

/// Manages all paths used by the survey form
#[derive(Debug, Clone)]
pub struct SurveyPaths {
    base_dir: PathBuf,
}

impl SurveyPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SurveyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "survey-form")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SurveyError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the interactive session log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("survey.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SurveyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SurveyError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Whether settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
