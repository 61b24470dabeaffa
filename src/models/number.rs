//! Lenient number parsing for form input
//!
//! Form fields hold free text. Parsing reads the longest numeric prefix after
//! leading whitespace, so `"12abc"` reads as 12 and `"abc"` reads as nothing.

/// Parse the leading decimal number of `input`
///
/// Accepts an optional sign, digits with an optional fractional part, an
/// optional exponent, and the literal `Infinity`. Returns `None` when no
/// number prefix exists.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it carries at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the leading integer of `input`
///
/// Stops at the first non-digit, so `"25.9"` reads as 25. Saturates instead
/// of overflowing.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));

    Some(if negative { -magnitude } else { magnitude })
}

/// Read an amount for aggregation: missing, unparseable or negative input is 0
pub fn amount_or_zero(input: &str) -> f64 {
    match parse_float(input) {
        Some(value) if value > 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("1234.5"), Some(1234.5));
        assert_eq!(parse_float("  12abc"), Some(12.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-3"), Some(-3.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_float_rejects() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("   "), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("$10"), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("18"), Some(18));
        assert_eq!(parse_int("25.9"), Some(25));
        assert_eq!(parse_int(" 42 years"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(amount_or_zero("200"), 200.0);
        assert_eq!(amount_or_zero(""), 0.0);
        assert_eq!(amount_or_zero("n/a"), 0.0);
        assert_eq!(amount_or_zero("-50"), 0.0);
    }
}
