use serde::Serialize;

/// Countdown digits: a duration split into whole days plus a 24-hour clock
/// remainder. Produced by [`crate::core::countdown::breakdown`]; always
/// non-negative, with `hours < 24`, `minutes < 60`, `seconds < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    /// True when every digit has reached zero (the launch moment, or later).
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Total whole seconds represented by the digits.
    pub fn total_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}
