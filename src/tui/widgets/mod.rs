//! Reusable widgets for the TUI

pub mod field;

pub use field::FieldWidget;
