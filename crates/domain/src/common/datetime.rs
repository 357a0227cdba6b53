//! Moment date parsing and formatting.
//!
//! Moments are stamped with a calendar day. The journal displays them as
//! `Aug 12, 2023`; ISO `2023-08-12` is accepted on input as well.

use chrono::NaiveDate;

use crate::error::DomainError;

/// Display format for moment dates (`Aug 12, 2023`).
pub const MOMENT_DATE_FORMAT: &str = "%b %d, %Y";

/// Parses a moment date in display (`Aug 12, 2023`) or ISO (`2023-08-12`) form.
///
/// # Examples
///
/// ```
/// use legends_domain::common::parse_moment_date;
/// use chrono::Datelike;
///
/// let date = parse_moment_date("Jan 15, 2024").unwrap();
/// assert_eq!(date.month(), 1);
/// ```
///
/// # Errors
///
/// Returns `DomainError::Parse` if the string matches neither format.
pub fn parse_moment_date(s: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, MOMENT_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| DomainError::parse(format!("Invalid moment date: {}", s)))
}

/// Formats a moment date for display (`Aug 12, 2023`).
pub fn format_moment_date(date: NaiveDate) -> String {
    date.format(MOMENT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_display_form() {
        let date = parse_moment_date("Aug 12, 2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 8, 12).unwrap());
    }

    #[test]
    fn test_parse_iso_form() {
        let date = parse_moment_date("2024-01-01").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_moment_date("someday"),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn test_format_zero_pads_day() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        assert_eq!(format_moment_date(date), "Sep 01, 2023");
    }
}
