//! Shared field rules
//!
//! The per-form validators all lean on the same handful of primitives:
//! blank detection for text fields, the strictly-positive rule for counts
//! and capacities, `HH:MM` time-of-day matching, and parsing of the
//! browser's `datetime-local` strings into real timestamps.
//!
//! Odd input yields `false`/`None`, never a panic, so validators can
//! degrade malformed values into error entries.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// 24-hour time of day, zero-padded: `00:00` through `23:59`.
static TIME_OF_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("time-of-day pattern"));

/// True when a text field is missing or holds only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}

/// The strictly-positive rule for count/capacity fields: `0` and missing
/// both count as absent.
pub fn is_positive_count(value: Option<u32>) -> bool {
    matches!(value, Some(n) if n > 0)
}

/// Parse a positive-integer text field (e.g. estimated attendance).
///
/// Returns `None` for blank, non-numeric, or non-positive input.
pub fn parse_positive_count(text: &str) -> Option<u32> {
    match text.trim().parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Does a schedule entry match the `HH:MM` format?
pub fn is_time_of_day(value: &str) -> bool {
    TIME_OF_DAY.is_match(value)
}

/// Parse a `datetime-local` string (`YYYY-MM-DDTHH:MM`, optionally with
/// seconds) into a timestamp.
pub fn parse_local_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("Merdeka Stadium")));
    }

    #[test]
    fn test_positive_count_boundaries() {
        assert!(!is_positive_count(None));
        assert!(!is_positive_count(Some(0)));
        assert!(is_positive_count(Some(1)));
    }

    #[test]
    fn test_parse_positive_count() {
        assert_eq!(parse_positive_count("500"), Some(500));
        assert_eq!(parse_positive_count(" 42 "), Some(42));
        assert_eq!(parse_positive_count("0"), None);
        assert_eq!(parse_positive_count("-3"), None);
        assert_eq!(parse_positive_count("lots"), None);
        assert_eq!(parse_positive_count(""), None);
    }

    #[test]
    fn test_time_of_day() {
        assert!(is_time_of_day("00:00"));
        assert!(is_time_of_day("08:00"));
        assert!(is_time_of_day("23:59"));
        assert!(!is_time_of_day("24:00"));
        assert!(!is_time_of_day("25:61"));
        assert!(!is_time_of_day("8:00"));
        assert!(!is_time_of_day("12:5"));
        assert!(!is_time_of_day(""));
    }

    #[test]
    fn test_local_timestamp_parsing() {
        let a = parse_local_timestamp("2025-01-01T10:00").unwrap();
        let b = parse_local_timestamp("2025-01-01T09:00").unwrap();
        assert!(a > b);

        // Equal timestamps compare equal, the ordering-check boundary.
        let c = parse_local_timestamp("2025-01-01T10:00").unwrap();
        assert_eq!(a, c);

        assert!(parse_local_timestamp("2025-01-01T10:00:30").is_some());
        assert!(parse_local_timestamp("next tuesday").is_none());
        assert!(parse_local_timestamp("").is_none());
    }
}
