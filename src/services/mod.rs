//! Service layer for the survey form
//!
//! The services are pure: they read a form snapshot (or a schema binding)
//! and return a result plus a patch describing the visual changes.

pub mod enablement;
pub mod summary;
pub mod validation;

pub use enablement::{clear_unless_checked, sync_amount_field};
pub use summary::{compute_summary, render_summary, Summary};
pub use validation::{
    mark_invalid, mark_valid, validate_field, validate_form, FieldValidity, MessageDisplay,
    ValidationIssue, ValidationReport,
};
