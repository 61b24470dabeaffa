//! Core data models for the survey form
//!
//! This module contains the value types the form logic works with: expense
//! categories, field identifiers, lenient number parsing and the form state
//! snapshot.

pub mod category;
pub mod field;
pub mod number;
pub mod state;

pub use category::ExpenseCategory;
pub use field::{FieldKey, Gender};
pub use state::{ExpenseInput, FormState};
