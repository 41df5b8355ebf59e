use chrono::prelude::*;

/// A point on the UTC timeline.
///
/// `DateTime<Utc>` is `Copy`, so every value handed in or out of a
/// [`Timespan`](crate::Timespan) is already an independent copy.
pub type Instant = DateTime<Utc>;

/// Builds an instant from a Unix timestamp in milliseconds.
///
/// Returns `None` if the value is outside of the representable range.
pub fn from_millis(ms: i64) -> Option<Instant> {
    Utc.timestamp_millis_opt(ms).single()
}
