//! Time utilities: parsing instants, launch-zone timestamps.

use crate::core::countdown::Instant;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};

/// Parse a command-line instant. Offset-carrying RFC 3339 first, then the
/// naive wall-clock shapes a date-time input widget produces.
pub fn parse_instant(s: &str) -> Option<Instant> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Instant::Zoned(dt));
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Instant::Naive(naive));
        }
    }

    None
}

/// Timestamp written into submission rows: launch-zone local time with
/// offset and whole seconds, e.g. `2025-11-01T12:00:00+01:00`.
pub fn row_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Human label for either instant flavor.
pub fn instant_label(i: &Instant) -> String {
    match i {
        Instant::Zoned(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, false),
        Instant::Naive(n) => n.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}
