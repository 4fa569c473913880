//! Timestamp parsing for canonical ticket files.
//!
//! Canonical files carry UTC instants, normally in the RFC 3339 millisecond
//! form the schema transformer emits. Hand-maintained fixtures also appear
//! with naive timestamps; those are interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Naive datetime formats accepted in canonical files.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats accepted in canonical files; time defaults to midnight.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a canonical timestamp into a UTC instant.
///
/// Offset-carrying values (RFC 3339) are converted; naive values are taken as
/// already UTC. Returns None for anything unparseable.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in &DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    for format in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_milliseconds() {
        let instant = parse_timestamp("2024-01-15T18:30:00.000Z").unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-01-15T18:30:00+00:00");
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let instant = parse_timestamp("2024-01-15T10:30:00-08:00").unwrap();
        assert_eq!(
            instant,
            parse_timestamp("2024-01-15T18:30:00.000Z").unwrap()
        );
    }

    #[test]
    fn naive_values_are_taken_as_utc() {
        let instant = parse_timestamp("2024-01-15 08:15:00").unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-01-15T08:15:00+00:00");
    }

    #[test]
    fn date_only_defaults_to_midnight() {
        let instant = parse_timestamp("2024-01-15").unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-01-15T00:00:00+00:00");
        assert_eq!(parse_timestamp("01/15/2024"), Some(instant));
    }

    #[test]
    fn rejects_garbage_and_blank() {
        assert_eq!(parse_timestamp("not-a-date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("2024-13-40"), None);
    }
}
