//! Free-text form fields and their display.

use crate::error::ValidationError;

/// Placeholder shown for an absent optional value.
pub const DASH: &str = "-";

/// Display an optional value, using [`DASH`] when absent or blank.
#[must_use]
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => DASH.to_string(),
    }
}

/// Trim a required text input.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] when the input is blank.
pub fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text input; blank becomes `None`.
#[must_use]
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a required selector value (identifier or enumerated option).
///
/// # Errors
///
/// Returns [`ValidationError::Required`] for a blank selection and
/// `invalid` when the text does not parse.
pub fn select<T: std::str::FromStr>(
    field: &'static str,
    raw: &str,
    invalid: ValidationError,
) -> Result<T, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    trimmed.parse().map_err(|_| invalid)
}

/// Parse an optional selector value; blank becomes `None`.
///
/// # Errors
///
/// Returns `invalid` when a non-blank value does not parse.
pub fn select_optional<T: std::str::FromStr>(
    raw: &str,
    invalid: ValidationError,
) -> Result<Option<T>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|_| invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::GuestId;

    #[test]
    fn should_show_dash_for_missing_or_blank_values() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("asha@example.com")), "asha@example.com");
    }

    #[test]
    fn should_trim_required_text() {
        assert_eq!(required("Full name", "  Asha ").unwrap(), "Asha");
        assert_eq!(
            required("Full name", " "),
            Err(ValidationError::Required("Full name"))
        );
    }

    #[test]
    fn should_map_blank_optional_to_none() {
        assert_eq!(optional(""), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }

    #[test]
    fn should_parse_selected_identifier() {
        let id: GuestId = select("Guest", "3", ValidationError::InvalidNumber("Guest")).unwrap();
        assert_eq!(id, GuestId::new(3));
    }

    #[test]
    fn should_distinguish_blank_and_invalid_selection() {
        let blank: Result<GuestId, _> = select("Guest", "", ValidationError::InvalidNumber("Guest"));
        assert_eq!(blank, Err(ValidationError::Required("Guest")));

        let bad: Result<GuestId, _> = select("Guest", "x", ValidationError::InvalidNumber("Guest"));
        assert_eq!(bad, Err(ValidationError::InvalidNumber("Guest")));
    }

    #[test]
    fn should_allow_blank_optional_selection() {
        let none: Option<GuestId> =
            select_optional("", ValidationError::InvalidNumber("Guest")).unwrap();
        assert_eq!(none, None);
    }
}
