//! Currency formatting
//!
//! Amounts are formatted for a single currency/locale configuration with a
//! grouping separator and exactly two fractional digits, e.g. `$1,234.50`.

use serde::{Deserialize, Serialize};

/// Currency and locale formatting preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Thousands separator
    #[serde(default = "default_grouping")]
    pub grouping_separator: char,
    /// Separator between whole and fractional units
    #[serde(default = "default_decimal")]
    pub decimal_separator: char,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_grouping() -> char {
    ','
}

fn default_decimal() -> char {
    '.'
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            grouping_separator: default_grouping(),
            decimal_separator: default_decimal(),
        }
    }
}

impl CurrencyFormat {
    /// Format an amount with the configured symbol and separators
    ///
    /// # Examples
    /// ```
    /// use survey_form::currency::CurrencyFormat;
    /// assert_eq!(CurrencyFormat::default().format(1234.5), "$1,234.50");
    /// ```
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}∞", sign, self.symbol);
        }

        // Round to whole cents half away from zero, then split the digits
        let cents = (amount.abs() * 100.0).round();
        let digits = format!("{:03.0}", cents);
        let (whole, fraction) = digits.split_at(digits.len() - 2);

        let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
        format!(
            "{}{}{}{}{}",
            sign,
            self.symbol,
            self.group(whole),
            self.decimal_separator,
            fraction
        )
    }

    fn group(&self, whole: &str) -> String {
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// Format an amount in US dollars
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::default().format(amount)
}

/// Format a ratio as a one-decimal percentage
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio)
}
