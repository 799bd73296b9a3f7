//! Attempt start/end timestamps (`MM/DD/YYYY HH:MM:SS`).

use crate::{Result, SplitsError};
use chrono::NaiveDateTime;

/// Layout used by the `started` and `ended` attempt attributes.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Parse an attempt timestamp. Fractional seconds are not accepted.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| SplitsError::format_error("timestamp", format!("{text:?}: {e}")))
}

/// Render an attempt timestamp, zero-padded.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
