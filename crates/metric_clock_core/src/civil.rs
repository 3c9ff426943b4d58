//! Civil (Gregorian) rendering of epoch seconds.
//!
//! # Responsibility
//! - Render UTC and host-local forms of a decoded instant for display.
//!
//! # Invariants
//! - Rendering never panics; unrepresentable instants yield `None`.
//! - Only host-local and UTC zones are supported.

use chrono::{DateTime, Local, Utc};

/// Placeholder shown for instants outside the representable calendar range.
pub const INVALID_DATE: &str = "Invalid Date";

const UTC_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LOCAL_FORMAT: &str = "%a, %b %-d, %Y, %H:%M:%S";
const MONTH_DAY_FORMAT: &str = "%-m/%-d";

/// Converts epoch seconds into a UTC datetime when representable.
pub fn utc_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
}

/// `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_utc(seconds: i64) -> Option<String> {
    utc_datetime(seconds).map(|dt| dt.format(UTC_FORMAT).to_string())
}

/// Long host-local form, e.g. `Thu, Oct 16, 2026, 14:03:22`.
pub fn format_local(seconds: i64) -> Option<String> {
    utc_datetime(seconds).map(|dt| dt.with_timezone(&Local).format(LOCAL_FORMAT).to_string())
}

/// Host-local numeric month/day, e.g. `10/16`, for the week strip.
pub fn format_local_month_day(seconds: i64) -> Option<String> {
    utc_datetime(seconds).map(|dt| {
        dt.with_timezone(&Local)
            .format(MONTH_DAY_FORMAT)
            .to_string()
    })
}

/// All display forms of one instant, with [`INVALID_DATE`] fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilRendering {
    pub utc: String,
    pub local: String,
    pub month_day: String,
}

impl CivilRendering {
    pub fn of(seconds: i64) -> Self {
        let or_invalid = |value: Option<String>| value.unwrap_or_else(|| INVALID_DATE.to_string());
        Self {
            utc: or_invalid(format_utc(seconds)),
            local: or_invalid(format_local(seconds)),
            month_day: or_invalid(format_local_month_day(seconds)),
        }
    }

    /// Whether the instant could be rendered at all.
    pub fn is_valid(&self) -> bool {
        self.utc != INVALID_DATE
    }
}
