//! Tracing setup
//!
//! The subscriber is installed once per process. The filter comes from
//! `SURVEY_FORM_LOG` when set, otherwise from the configured log level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::SurveyError;

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "SURVEY_FORM_LOG";

static TRACING_INIT: Once = Once::new();

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error, for headless commands
    Stderr,
    /// Appended to a file, so the terminal UI stays clean
    File(&'a Path),
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber
///
/// Later calls are no-ops.
pub fn init_tracing(target: LogTarget<'_>, default_level: &str) -> Result<(), SurveyError> {
    let writer = match target {
        LogTarget::Stderr => None,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(file)
        }
    };
    let filter = filter(default_level);

    TRACING_INIT.call_once(|| {
        // Another subscriber may already be installed (tests); keep it.
        let _ = match writer {
            Some(file) => fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            None => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    });
    Ok(())
}
