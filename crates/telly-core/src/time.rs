//! Wall-clock helpers for feed timestamps.
//!
//! The upstream feed dates its items in RFC 2822 (`pubDate`). Show times are
//! compared against the machine's local clock, so every parsed timestamp is
//! shifted by a configured hour offset into the local frame first.

use chrono::{DateTime, Duration, Local, NaiveDateTime};

/// Parse an RFC 2822 feed timestamp and shift it into the local clock frame.
pub fn parse_show_time(raw: &str, shift_hours: i64) -> Result<NaiveDateTime, chrono::ParseError> {
    let parsed = DateTime::parse_from_rfc2822(raw.trim())?;
    Ok(parsed.naive_utc() + Duration::hours(shift_hours))
}

/// Display format used in notification bodies, e.g. `12. 01. 2026 20:15`.
pub fn format_show_time(t: NaiveDateTime) -> String {
    t.format("%d. %m. %Y %H:%M").to_string()
}

/// Current local wall-clock reading.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
