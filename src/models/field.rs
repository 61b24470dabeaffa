//! Survey field identifiers and the gender choice set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;

/// Element id of the income field
pub const TOTAL_INCOME_ID: &str = "total_income";
/// Element id of the age field
pub const AGE_ID: &str = "age";
/// Element id of the gender select
pub const GENDER_ID: &str = "gender";
/// Element id of the form itself
pub const FORM_ID: &str = "surveyForm";

/// A form control the survey logic knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Age,
    Gender,
    TotalIncome,
    ExpenseCheck(ExpenseCategory),
    ExpenseAmount(ExpenseCategory),
}

impl FieldKey {
    /// The element id this field is rendered under
    pub fn element_id(self) -> String {
        match self {
            Self::Age => AGE_ID.to_string(),
            Self::Gender => GENDER_ID.to_string(),
            Self::TotalIncome => TOTAL_INCOME_ID.to_string(),
            Self::ExpenseCheck(c) => c.checkbox_id(),
            Self::ExpenseAmount(c) => c.amount_id(),
        }
    }

    /// Reverse lookup from an element id
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            AGE_ID => Some(Self::Age),
            GENDER_ID => Some(Self::Gender),
            TOTAL_INCOME_ID => Some(Self::TotalIncome),
            _ => ExpenseCategory::ALL.into_iter().find_map(|c| {
                if id == c.checkbox_id() {
                    Some(Self::ExpenseCheck(c))
                } else if id == c.amount_id() {
                    Some(Self::ExpenseAmount(c))
                } else {
                    None
                }
            }),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element_id())
    }
}

/// Gender choices offered by the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    /// Submitted value
    pub const fn value(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer_not_to_say",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.value() == normalized)
            .ok_or_else(|| format!("unknown gender: {}", s))
    }
}
