use thiserror::Error;

/// Raised when text cannot be read as a money amount.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` cannot be read as an amount")]
pub struct AmountParseError(pub String);

/// Parses a money amount, accepting both `.` and `,` as the decimal separator.
pub fn parse_amount(text: &str) -> Result<f64, AmountParseError> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| AmountParseError(text.to_string()))?;
    if !value.is_finite() {
        return Err(AmountParseError(text.to_string()));
    }
    Ok(value)
}

/// Renders an amount with exactly two fraction digits and `.` as the separator.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Whole cents after rounding; reports hide categories that round to zero.
pub fn cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_decimal_separators() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("12,5").unwrap(), 12.5);
        assert_eq!(parse_amount(" 7 ").unwrap(), 7.0);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn rejects_text_that_is_not_a_number() {
        assert!(parse_amount("twelve").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn formats_with_two_fraction_digits() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(150.0), "150.00");
    }

    #[test]
    fn cents_round_instead_of_truncating() {
        assert_eq!(cents(0.0), 0);
        assert_eq!(cents(12.34), 1234);
        assert_eq!(cents(0.004), 0);
        assert_eq!(cents(0.005), 1);
    }
}
