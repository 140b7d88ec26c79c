//! Date helpers: the calendar day "today", form parsing, and display.

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::error::ValidationError;

/// Calendar dates exchanged with the backend (`YYYY-MM-DD`).
pub type Date = NaiveDate;

/// Creation timestamps as stored by the backend (no zone information).
pub type Timestamp = NaiveDateTime;

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Return the current UTC calendar day.
#[must_use]
pub fn today() -> Date {
    Utc::now().date_naive()
}

/// Render a date for humans (`dd/mm/yyyy`).
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Render the calendar day of a timestamp for humans.
#[must_use]
pub fn format_timestamp(ts: Timestamp) -> String {
    format_date(ts.date())
}

/// Render a date as a form input value (`YYYY-MM-DD`).
#[must_use]
pub fn input_value(date: Date) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Parse a required date input.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] when `raw` is blank and
/// [`ValidationError::InvalidDate`] when it is not `YYYY-MM-DD`.
pub fn parse_date(field: &'static str, raw: &str) -> Result<Date, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required(field));
    }
    NaiveDate::parse_from_str(raw, INPUT_FORMAT).map_err(|_| ValidationError::InvalidDate(field))
}

/// Parse an optional date input; blank means `None`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when a non-blank value is not
/// `YYYY-MM-DD`.
pub fn parse_optional_date(
    field: &'static str,
    raw: &str,
) -> Result<Option<Date>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(field, raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_return_current_utc_day() {
        let before = Utc::now().date_naive();
        let day = today();
        let after = Utc::now().date_naive();
        assert!(day >= before && day <= after);
    }

    #[test]
    fn should_format_dates_day_first() {
        assert_eq!(format_date(date(2024, 3, 9)), "09/03/2024");
    }

    #[test]
    fn should_format_timestamp_as_its_day() {
        let ts = date(2024, 12, 31).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(format_timestamp(ts), "31/12/2024");
    }

    #[test]
    fn should_render_input_value_iso() {
        assert_eq!(input_value(date(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn should_parse_iso_input() {
        assert_eq!(parse_date("Date", " 2024-06-01 ").unwrap(), date(2024, 6, 1));
    }

    #[test]
    fn should_require_non_blank_date() {
        assert_eq!(
            parse_date("Check-in date", "  "),
            Err(ValidationError::Required("Check-in date"))
        );
    }

    #[test]
    fn should_reject_malformed_date() {
        assert_eq!(
            parse_date("Date", "01/06/2024"),
            Err(ValidationError::InvalidDate("Date"))
        );
    }

    #[test]
    fn should_treat_blank_optional_date_as_none() {
        assert_eq!(parse_optional_date("Check-out date", "").unwrap(), None);
        assert_eq!(
            parse_optional_date("Check-out date", "2024-02-29").unwrap(),
            Some(date(2024, 2, 29))
        );
    }
}
