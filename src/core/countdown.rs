//! Countdown arithmetic for the launch banner.
//!
//! Everything here is pure: the presentation layer calls [`remaining`] on
//! whatever refresh cadence it likes (once per second on the live page) and
//! renders the digits of the resulting [`Breakdown`].

use crate::models::Breakdown;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// A point in time, either carrying a UTC offset or deliberately naive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instant {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Instant::Zoned(dt)
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::Naive(dt)
    }
}

/// Non-negative time remaining between `now` and `launch`.
///
/// Both sides may be zoned or naive. A mixed pair is compared on wall
/// clocks: the zoned side drops its offset and the naive side is taken as if
/// it shared that offset. The error of that approximation is bounded by the
/// offset itself, and the computation has no failure path.
pub fn remaining(now: Instant, launch: Instant) -> TimeDelta {
    let delta = match (now, launch) {
        (Instant::Zoned(n), Instant::Zoned(l)) => l - n,
        (Instant::Naive(n), Instant::Naive(l)) => l - n,
        (Instant::Zoned(n), Instant::Naive(l)) => l - n.naive_local(),
        (Instant::Naive(n), Instant::Zoned(l)) => l.naive_local() - n,
    };
    delta.max(TimeDelta::zero())
}

/// Split a duration into countdown digits with no loss or double-count:
/// `days*86400 + hours*3600 + minutes*60 + seconds` equals the duration's
/// whole seconds. Negative input decomposes to all zeros.
pub fn breakdown(delta: TimeDelta) -> Breakdown {
    let total = delta.num_seconds().max(0);
    Breakdown {
        days: total / 86_400,
        hours: total % 86_400 / 3_600,
        minutes: total % 3_600 / 60,
        seconds: total % 60,
    }
}

/// Madrid's UTC offset at the launch instant (CET, UTC+1).
pub fn madrid_offset() -> FixedOffset {
    FixedOffset::east_opt(3_600).unwrap()
}

/// The fixed public launch instant: 2025-11-01 12:00:00, Madrid time.
pub fn launch_time() -> DateTime<FixedOffset> {
    madrid_offset()
        .with_ymd_and_hms(2025, 11, 1, 12, 0, 0)
        .unwrap()
}

/// Current instant, expressed on the Madrid offset.
pub fn now_madrid() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&madrid_offset())
}
