//! survey-form - Household expense survey with live summary and validation
//!
//! This library implements the logic of a household expense survey form:
//! expense fields that follow their checkboxes, a live income/expense
//! summary, and field-level plus whole-form validation. The logic runs
//! against a [`document::Document`] and describes its visual changes as
//! patches, so the same controller drives the terminal UI, the headless
//! `check` command and the tests.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Categories, field keys, lenient number parsing, form snapshots
//! - `document`: The rendered form, patches and the typed schema
//! - `services`: Enablement, summary and validation logic
//! - `controller`: Event registry, tooltips and the public form API
//! - `currency`: Currency formatting
//! - `submission`: Form data, survey responses and their output formats
//! - `cli`, `display`, `tui`: Outer surfaces
//!
//! # Example
//!
//! ```rust
//! use survey_form::controller::{ControllerOptions, SurveyController};
//! use survey_form::document::Document;
//! use survey_form::models::ExpenseCategory;
//!
//! let mut form = SurveyController::new(Document::survey(), ControllerOptions::default());
//! form.set_value("total_income", "1000");
//! form.set_checked(ExpenseCategory::Utilities, true);
//! form.set_value("utilities_amount", "200");
//!
//! let summary = form.recompute_summary().unwrap();
//! assert_eq!(form.format_currency(summary.balance), "$800.00");
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod currency;
pub mod display;
pub mod document;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod submission;
pub mod tui;

pub use controller::{SubmitOutcome, SurveyController};
pub use error::SurveyError;
