//! Monetary amounts: parsing form input and rendering rupee values.

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "\u{20B9}";

/// Render an amount as `₹` plus a comma-grouped integer part and at most two
/// fraction digits, with trailing zeros dropped (`₹5,000`, `₹1,234.5`).
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 6);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse a required, strictly positive amount typed into a form.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] for blank input,
/// [`ValidationError::InvalidNumber`] for non-numeric text, and
/// [`ValidationError::NotPositive`] for zero or negative amounts.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required(field));
    }
    let amount: Decimal = raw
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(field))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(amount)
}

/// Sum a sequence of amounts.
pub fn total<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn should_group_thousands_and_drop_zero_fraction() {
        assert_eq!(format_currency(dec("5000.00")), "\u{20B9}5,000");
        assert_eq!(format_currency(dec("1234567")), "\u{20B9}1,234,567");
    }

    #[test]
    fn should_keep_significant_fraction_digits() {
        assert_eq!(format_currency(dec("1234.50")), "\u{20B9}1,234.5");
        assert_eq!(format_currency(dec("99.999")), "\u{20B9}100");
        assert_eq!(format_currency(dec("0.05")), "\u{20B9}0.05");
    }

    #[test]
    fn should_format_small_and_zero_amounts() {
        assert_eq!(format_currency(dec("999")), "\u{20B9}999");
        assert_eq!(format_currency(Decimal::ZERO), "\u{20B9}0");
    }

    #[test]
    fn should_parse_positive_amount() {
        assert_eq!(parse_amount("Amount", " 4500.75 ").unwrap(), dec("4500.75"));
    }

    #[test]
    fn should_reject_blank_amount() {
        assert_eq!(
            parse_amount("Amount", ""),
            Err(ValidationError::Required("Amount"))
        );
    }

    #[test]
    fn should_reject_non_numeric_amount() {
        assert_eq!(
            parse_amount("Amount", "five"),
            Err(ValidationError::InvalidNumber("Amount"))
        );
    }

    #[test]
    fn should_reject_zero_and_negative_amounts() {
        assert_eq!(
            parse_amount("Amount", "0"),
            Err(ValidationError::NotPositive("Amount"))
        );
        assert_eq!(
            parse_amount("Amount", "-10"),
            Err(ValidationError::NotPositive("Amount"))
        );
    }

    #[test]
    fn should_sum_amounts() {
        let sum = total([dec("1000"), dec("250.50"), dec("0.50")]);
        assert_eq!(sum, dec("1251"));
        assert_eq!(total(std::iter::empty()), Decimal::ZERO);
    }
}
