//! Canonical text formatting for scalar values on the wire.
//!
//! The service expects lowercase booleans, base-10 integers, and UTC
//! timestamps in `YYYY-MM-DDTHH:MM:SSZ` form. Writing always uses the
//! canonical form; reading is stricter for booleans and integers (a bad
//! value is a decode error, never a silent default) but tolerates the
//! handful of alternate timestamp shapes the service is known to emit.

use chrono::{DateTime, NaiveDate, Utc};

use crate::xml::errors::XmlError;

/// Formats a boolean as lowercase `true`/`false`.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Formats a timestamp in the wire format the service recognizes.
#[must_use]
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parses a lowercase wire boolean.
///
/// # Errors
///
/// Returns [`XmlError::Scalar`] for anything other than `true` or `false`.
pub fn parse_bool(text: &str) -> Result<bool, XmlError> {
    match text.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(XmlError::Scalar {
            value: other.to_string(),
            expected: "boolean",
        }),
    }
}

/// Parses a base-10 signed integer.
///
/// # Errors
///
/// Returns [`XmlError::Scalar`] when the text is not an integer.
pub fn parse_i64(text: &str) -> Result<i64, XmlError> {
    text.trim().parse().map_err(|_| XmlError::Scalar {
        value: text.to_string(),
        expected: "integer",
    })
}

/// Parses a base-10 signed 32-bit integer.
///
/// # Errors
///
/// Returns [`XmlError::Scalar`] when the text is not an integer in range.
pub fn parse_i32(text: &str) -> Result<i32, XmlError> {
    text.trim().parse().map_err(|_| XmlError::Scalar {
        value: text.to_string(),
        expected: "integer",
    })
}

/// Parses a wire timestamp.
///
/// Accepts the canonical RFC 3339 form first, then the RFC 2822 form and a
/// bare `YYYY-MM-DD` date (midnight UTC), both of which the service emits
/// on some endpoints.
///
/// # Errors
///
/// Returns [`XmlError::Scalar`] when no accepted format matches.
pub fn parse_datetime(text: &str) -> Result<DateTime<Utc>, XmlError> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    Err(XmlError::Scalar {
        value: text.to_string(),
        expected: "timestamp",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bool_formatting_is_lowercase() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }

    #[test]
    fn test_bool_parsing_rejects_other_spellings() {
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(matches!(parse_bool("True"), Err(XmlError::Scalar { .. })));
        assert!(matches!(parse_bool("1"), Err(XmlError::Scalar { .. })));
    }

    #[test]
    fn test_integer_parsing() {
        assert_eq!(parse_i64("482").unwrap(), 482);
        assert_eq!(parse_i64(" -3 ").unwrap(), -3);
        assert!(matches!(parse_i64("4.5"), Err(XmlError::Scalar { .. })));
        assert!(matches!(parse_i32(""), Err(XmlError::Scalar { .. })));
    }

    #[test]
    fn test_datetime_round_trips_in_canonical_form() {
        let dt = Utc.with_ymd_and_hms(2011, 7, 20, 22, 55, 29).unwrap();
        let text = format_datetime(&dt);
        assert_eq!(text, "2011-07-20T22:55:29Z");
        assert_eq!(parse_datetime(&text).unwrap(), dt);
    }

    #[test]
    fn test_datetime_tolerates_alternate_formats() {
        let rfc2822 = parse_datetime("Wed, 20 Jul 2011 22:55:29 +0000").unwrap();
        assert_eq!(rfc2822, Utc.with_ymd_and_hms(2011, 7, 20, 22, 55, 29).unwrap());

        let date_only = parse_datetime("2011-07-20").unwrap();
        assert_eq!(date_only, Utc.with_ymd_and_hms(2011, 7, 20, 0, 0, 0).unwrap());

        assert!(matches!(
            parse_datetime("yesterday"),
            Err(XmlError::Scalar { .. })
        ));
    }
}
