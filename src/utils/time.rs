//! Time utilities: parsing event timestamps, duration computations.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Input timestamp format, fraction required: `2023-02-01T08:18:36.000000Z`.
const EVENT_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S.%fZ";

pub fn parse_event_time(t: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(t, EVENT_TIME_FMT)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Elapsed hours between two instants, millisecond resolution.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}
