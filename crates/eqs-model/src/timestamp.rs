//! Timestamp text contracts shared with the store.
//!
//! Both formats are local wall-clock times without an offset. The shape
//! checks only look at ASCII digits and separators; calendar validity is
//! left to [`parse_modified_at`] and [`parse_return_time`].

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// `DATA` column format (second precision).
pub const MODIFIED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `RETORNO` column format (minute precision).
pub const RETURN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Human-readable pattern for second-precision stamps.
pub const MODIFIED_AT_PATTERN: &str = "YYYY-MM-DDTHH:MM:SS";

/// Human-readable pattern for minute-precision stamps.
pub const RETURN_TIME_PATTERN: &str = "YYYY-MM-DDTHH:MM";

static SECOND_PRECISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("valid second precision regex")
});

static MINUTE_PRECISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}$")
        .expect("valid minute precision regex")
});

/// Returns true if `value` has the `YYYY-MM-DDTHH:MM:SS` shape.
pub fn is_second_precision(value: &str) -> bool {
    SECOND_PRECISION.is_match(value)
}

/// Returns true if `value` has the `YYYY-MM-DDTHH:MM` shape.
pub fn is_minute_precision(value: &str) -> bool {
    MINUTE_PRECISION.is_match(value)
}

/// Parses a `DATA` value into a calendar time.
pub fn parse_modified_at(value: &str) -> Option<NaiveDateTime> {
    if !is_second_precision(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, MODIFIED_AT_FORMAT).ok()
}

/// Parses a `RETORNO` value into a calendar time.
pub fn parse_return_time(value: &str) -> Option<NaiveDateTime> {
    if !is_minute_precision(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, RETURN_TIME_FORMAT).ok()
}

/// Formats a modification stamp in the second-precision contract.
pub fn stamp(at: NaiveDateTime) -> String {
    at.format(MODIFIED_AT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn second_precision_shapes() {
        assert!(is_second_precision("2024-01-15T10:30:45"));
        assert!(!is_second_precision("2024-01-15T10:30"));
        assert!(!is_second_precision("2024-01-15 10:30:45"));
        assert!(!is_second_precision("2024-01-15T10:30:45Z"));
        assert!(!is_second_precision("2024-01-15T10:30:45.000"));
    }

    #[test]
    fn minute_precision_shapes() {
        assert!(is_minute_precision("2024-01-15T10:30"));
        assert!(!is_minute_precision("2024-01-15T10:30:00"));
        assert!(!is_minute_precision("15/01/2024 10:30"));
    }

    #[test]
    fn non_ascii_digits_are_refused() {
        assert!(!is_second_precision("٢٠٢٤-٠١-١٥T١٠:٣٠:٤٥"));
        assert!(!is_minute_precision("٢٠٢٤-٠١-١٥T١٠:٣٠"));
        assert!(!is_second_precision("２０２４-01-15T10:30:45"));
    }

    #[test]
    fn shape_check_ignores_calendar() {
        assert!(is_second_precision("2024-13-45T99:99:99"));
        assert_eq!(parse_modified_at("2024-13-45T99:99:99"), None);
    }

    #[test]
    fn stamp_round_trips() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();
        let text = stamp(at);
        assert_eq!(text, "2024-03-09T07:05:03");
        assert_eq!(parse_modified_at(&text), Some(at));
    }
}
