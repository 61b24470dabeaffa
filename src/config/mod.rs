//! Configuration module for the survey form
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SurveyPaths;
pub use settings::Settings;
