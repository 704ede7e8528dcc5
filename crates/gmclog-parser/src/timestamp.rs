use chrono::{DateTime, NaiveDateTime};

use crate::config::DateMode;

/// The device's native export granularity: date plus hour:minute, UTC.
const NATIVE_FORMAT: &str = "%Y-%m-%d %H:%M";

static LENIENT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a raw date token into milliseconds since the epoch. Returns
/// `None` when the token does not resolve to a valid calendar instant.
pub fn parse_instant(raw: &str, mode: DateMode) -> Option<i64> {
    let trimmed = raw.trim();
    match mode {
        DateMode::Strict => parse_with(trimmed, &[NATIVE_FORMAT]),
        DateMode::Lenient => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
                return Some(dt.timestamp_millis());
            }
            parse_with(trimmed, LENIENT_FORMATS)
        }
    }
}

fn parse_with(value: &str, formats: &[&str]) -> Option<i64> {
    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(value, fmt)
            .ok()
            .map(|dt| dt.and_utc().timestamp_millis())
    })
}
