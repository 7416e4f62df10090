//! Calendar date helpers for close approach timestamps.
//!
//! Approach times arrive as `YYYY-Mon-DD hh:mm` (e.g. `2020-Jan-01 12:00`)
//! and are rendered back with a numeric month and minute precision.

use chrono::NaiveDateTime;

use crate::error::{ModelError, ModelResult};

/// Input shape of the `cd` field.
pub const CALENDAR_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Output shape used for display and export.
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a calendar date string into a UTC timestamp.
pub fn cd_to_datetime(calendar_date: &str) -> ModelResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), CALENDAR_FORMAT).map_err(|e| {
        ModelError::InvalidTimestamp {
            value: calendar_date.to_string(),
            message: e.to_string(),
        }
    })
}

/// Format a timestamp without seconds.
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(OUTPUT_FORMAT).to_string()
}
