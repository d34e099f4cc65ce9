//! Result ID generation.
//!
//! IDs are the creation time in epoch milliseconds, rendered as a decimal
//! string. When two results land in the same millisecond the newer one is
//! bumped past the newest existing ID so IDs stay unique and ordered.

use chrono::{DateTime, Utc};

/// Truncate `now` to millisecond precision, the precision snapshots persist.
#[must_use]
pub fn to_millis_precision(now: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Produce the ID for a result created at `now`.
///
/// `newest` is the ID of the most recent stored result, if any. IDs that do
/// not parse as integers are ignored.
#[must_use]
pub fn next_result_id(now: DateTime<Utc>, newest: Option<&str>) -> String {
    let candidate = now.timestamp_millis();
    let floor = newest
        .and_then(|id| id.parse::<i64>().ok())
        .map_or(i64::MIN, |id| id.saturating_add(1));
    candidate.max(floor).to_string()
}
