//! Vendor timestamp parsing into canonical UTC instants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

/// Timezone applied to vendor timestamps that carry no offset of their own.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Vancouver;

/// Naive layouts accepted from vendor exports, tried in order. Date-only
/// values resolve to local midnight.
const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Why a vendor timestamp could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTimeError {
    /// No accepted layout matched.
    Unrecognized,
    /// The wall-clock value falls in a spring-forward gap and names no real
    /// instant.
    Nonexistent,
}

/// Convert a vendor timestamp to canonical UTC RFC 3339 with milliseconds.
///
/// Values carrying an explicit offset are honored as-is. Naive values are
/// read in `timezone`; an ambiguous wall-clock time (clocks rolled back)
/// resolves to the earlier instant.
pub fn to_canonical_utc(value: &str, timezone: Tz) -> Result<String, LocalTimeError> {
    Ok(parse_instant(value, timezone)?.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_instant(value: &str, timezone: Tz) -> Result<DateTime<Utc>, LocalTimeError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    let naive = parse_naive(value).ok_or(LocalTimeError::Unrecognized)?;
    let instant = timezone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(LocalTimeError::Nonexistent)?;
    Ok(instant.with_timezone(&Utc))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winter_local_times_convert_at_utc_minus_8() {
        let utc = to_canonical_utc("2024-01-15 10:30:00", DEFAULT_TIMEZONE).unwrap();
        assert_eq!(utc, "2024-01-15T18:30:00.000Z");
    }

    #[test]
    fn summer_local_times_convert_at_utc_minus_7() {
        let utc = to_canonical_utc("2024-07-15 10:30:00", DEFAULT_TIMEZONE).unwrap();
        assert_eq!(utc, "2024-07-15T17:30:00.000Z");
    }

    #[test]
    fn all_naive_layouts_are_accepted() {
        assert_eq!(
            to_canonical_utc("2024-01-15T10:30:00", DEFAULT_TIMEZONE).unwrap(),
            "2024-01-15T18:30:00.000Z"
        );
        assert_eq!(
            to_canonical_utc("2024-01-15 10:30", DEFAULT_TIMEZONE).unwrap(),
            "2024-01-15T18:30:00.000Z"
        );
        assert_eq!(
            to_canonical_utc("2024-01-15", DEFAULT_TIMEZONE).unwrap(),
            "2024-01-15T08:00:00.000Z"
        );
    }

    #[test]
    fn explicit_offsets_win_over_the_source_timezone() {
        assert_eq!(
            to_canonical_utc("2024-01-15T18:30:00.000Z", DEFAULT_TIMEZONE).unwrap(),
            "2024-01-15T18:30:00.000Z"
        );
        assert_eq!(
            to_canonical_utc("2024-01-15T10:30:00+02:00", DEFAULT_TIMEZONE).unwrap(),
            "2024-01-15T08:30:00.000Z"
        );
    }

    #[test]
    fn ambiguous_fall_back_times_resolve_to_the_earlier_instant() {
        // 2024-11-03 01:30 happens twice in Vancouver; the earlier pass is
        // still on daylight time (UTC-7).
        let utc = to_canonical_utc("2024-11-03 01:30:00", DEFAULT_TIMEZONE).unwrap();
        assert_eq!(utc, "2024-11-03T08:30:00.000Z");
    }

    #[test]
    fn nonexistent_spring_forward_times_are_rejected() {
        // 2024-03-10 02:30 was skipped in Vancouver.
        assert_eq!(
            to_canonical_utc("2024-03-10 02:30:00", DEFAULT_TIMEZONE),
            Err(LocalTimeError::Nonexistent)
        );
    }

    #[test]
    fn unrecognized_layouts_are_rejected() {
        assert_eq!(
            to_canonical_utc("15/01/2024", DEFAULT_TIMEZONE),
            Err(LocalTimeError::Unrecognized)
        );
        assert_eq!(
            to_canonical_utc("soon", DEFAULT_TIMEZONE),
            Err(LocalTimeError::Unrecognized)
        );
    }
}
