//! Formatting utilities used for CLI outputs.

use crate::models::Breakdown;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a countdown breakdown as text.
///
/// Long form mirrors the landing page boxes, short form is a compact clock:
/// `31 days 00h 00m 00s` vs `31d 00:00:00`.
pub fn countdown2readable(b: &Breakdown, short: bool) -> String {
    if short {
        format!(
            "{:02}d {:02}:{:02}:{:02}",
            b.days, b.hours, b.minutes, b.seconds
        )
    } else {
        format!(
            "{:02} days {:02}h {:02}m {:02}s",
            b.days, b.hours, b.minutes, b.seconds
        )
    }
}
