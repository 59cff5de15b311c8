//! Timestamp rendering and parsing.
//!
//! Rendering always produces UTC ISO-8601 text. Parsing accepts exactly two
//! shapes, the same two that [`is_timestamp`] recognises:
//!
//! - ISO, `Z`-terminated: `YYYY-MM-DDTHH:MM:SSZ` or `YYYY-MM-DDTHH:MM:SS.sssZ`
//! - standard: `YYYY-MM-DDTHH:MM:SS` (read as UTC)

use crate::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Utc};
use tracing::debug;

const STANDARD_LEN: usize = "YYYY-MM-DDTHH:MM:SS".len();

/// Renders an instant as ISO-8601 UTC text.
///
/// Years outside `0..=9999` use the extended six-digit signed form
/// (`+010000-01-01T00:00:00.000Z`, `-000001-...`).
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use logvalue::render_timestamp;
///
/// let instant = Utc.timestamp_millis_opt(1000).unwrap();
/// assert_eq!(render_timestamp(&instant, true), "1970-01-01T00:00:01.000Z");
/// assert_eq!(render_timestamp(&instant, false), "1970-01-01T00:00:01Z");
/// ```
#[must_use]
pub fn render_timestamp(instant: &DateTime<Utc>, include_fractional: bool) -> String {
    let rest = if include_fractional {
        instant.format("-%m-%dT%H:%M:%S%.3fZ")
    } else {
        instant.format("-%m-%dT%H:%M:%SZ")
    };
    match instant.year() {
        year @ 0..=9999 => format!("{:04}{}", year, rest),
        year if year < 0 => format!("-{:06}{}", year.unsigned_abs(), rest),
        year => format!("+{:06}{}", year, rest),
    }
}

/// Returns `true` if `text` is a timestamp in one of the accepted shapes and
/// denotes a real calendar instant.
///
/// # Examples
///
/// ```rust
/// use logvalue::is_timestamp;
///
/// assert!(is_timestamp("2025-01-15T10:30:45.123Z"));
/// assert!(is_timestamp("2025-01-15T10:30:45"));
/// assert!(!is_timestamp("2025-02-30T10:30:45Z"));
/// assert!(!is_timestamp("2025-01-15 10:30:45"));
/// ```
#[must_use]
pub fn is_timestamp(text: &str) -> bool {
    parse_timestamp(text).is_ok()
}

/// Parses a timestamp in one of the accepted shapes.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if the text does not match either
/// shape or names a date or time that does not exist.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    parse_shape(text).map_err(|reason| {
        debug!(input = text, reason, "rejected timestamp");
        Error::invalid_timestamp(text, reason)
    })
}

fn parse_shape(text: &str) -> std::result::Result<DateTime<Utc>, &'static str> {
    let bytes = text.as_bytes();
    let millis = match bytes.len() {
        STANDARD_LEN => 0,
        n if n == STANDARD_LEN + 1 && bytes[STANDARD_LEN] == b'Z' => 0,
        n if n == STANDARD_LEN + 5 && bytes[STANDARD_LEN] == b'.' && bytes[n - 1] == b'Z' => {
            digits(&bytes[STANDARD_LEN + 1..n - 1]).ok_or("malformed fractional seconds")?
        }
        _ => return Err("unrecognised timestamp shape"),
    };

    let head = &bytes[..STANDARD_LEN];
    let shape_ok = head.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err("unrecognised timestamp shape");
    }
    // Leap seconds are not real instants here.
    if digits(&head[17..19]).unwrap_or(0) > 59 {
        return Err("second out of range");
    }

    let naive = NaiveDateTime::parse_from_str(&text[..STANDARD_LEN], "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| "date or time out of range")?;
    Ok(naive.and_utc() + Duration::milliseconds(i64::from(millis)))
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_epoch() {
        let epoch = Utc.timestamp_millis_opt(0).unwrap();
        assert_eq!(render_timestamp(&epoch, true), "1970-01-01T00:00:00.000Z");
        assert_eq!(render_timestamp(&epoch, false), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_render_extended_years() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(render_timestamp(&far, true), "+010000-01-01T00:00:00.000Z");
        let before_epoch = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(render_timestamp(&before_epoch, false), "-000001-01-01T00:00:00Z");
        let year_zero = Utc.with_ymd_and_hms(0, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(render_timestamp(&year_zero, false), "0000-06-01T00:00:00Z");
    }

    #[test]
    fn test_render_truncates_sub_millisecond() {
        let instant = Utc.timestamp_opt(1_736_937_045, 123_987_654).unwrap();
        assert_eq!(render_timestamp(&instant, true), "2025-01-15T10:30:45.123Z");
        assert_eq!(render_timestamp(&instant, false), "2025-01-15T10:30:45Z");
    }

    #[test]
    fn test_parse_iso_with_millis() {
        let parsed = parse_timestamp("2025-01-15T10:30:45.123Z").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_736_937_045_123);
    }

    #[test]
    fn test_parse_standard_is_utc() {
        let parsed = parse_timestamp("2025-01-15T10:30:45").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 45).unwrap());
        assert_eq!(parsed, parse_timestamp("2025-01-15T10:30:45Z").unwrap());
    }

    #[test]
    fn test_rejected_shapes() {
        for text in [
            "",
            "2025-01-15",
            "2025-01-15T10:30",
            "2025-01-15T10:30:45.12Z",
            "2025-01-15T10:30:45.123",
            "2025-01-15T10:30:45+09:00",
            "2025/01/15T10:30:45Z",
            "2025-01-15t10:30:45Z",
            "２０２５-01-15T10:30:45Z",
        ] {
            assert!(!is_timestamp(text), "{:?}", text);
        }
    }

    #[test]
    fn test_rejected_instants() {
        for text in [
            "2025-13-01T00:00:00Z",
            "2025-02-29T00:00:00Z",
            "2025-01-15T24:00:00Z",
            "2025-01-15T10:60:00Z",
            "2025-01-15T10:30:60Z",
        ] {
            let err = parse_timestamp(text).unwrap_err();
            assert!(matches!(err, Error::InvalidTimestamp { ref input, .. } if input == text));
        }
        assert!(is_timestamp("2024-02-29T00:00:00Z"));
    }
}
