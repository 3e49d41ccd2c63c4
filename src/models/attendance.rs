use super::event_type::EventType;
use crate::utils::formatting::round2;
use crate::utils::time::hours_between;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

/// Per-user attendance accumulator.
///
/// `total_hours` only grows, and only when a GATE_IN is immediately followed
/// by a GATE_OUT for the same user. Every event, paired or not, becomes the
/// new `last_action`.
#[derive(Debug, Clone, Default)]
pub struct UserAttendance {
    pub total_hours: f64,
    pub days: BTreeSet<NaiveDate>,
    pub last_action: Option<(EventType, DateTime<Utc>)>,
}

impl UserAttendance {
    /// Feed one event into the accumulator.
    ///
    /// Precondition: events for a user arrive sorted by timestamp.
    pub fn record(&mut self, kind: EventType, timestamp: DateTime<Utc>) {
        if let Some((last_kind, last_ts)) = self.last_action
            && last_kind.is_in()
            && kind.is_out()
        {
            self.total_hours += hours_between(last_ts, timestamp);
            self.days.insert(timestamp.date_naive());
        }
        self.last_action = Some((kind, timestamp));
    }

    pub fn days_present(&self) -> usize {
        self.days.len()
    }

    /// Average hours per present day, rounded to 2 decimals.
    /// Defined as 0 when no day is present (no division by zero).
    pub fn average_per_day(&self) -> f64 {
        let days = self.days.len();
        if days == 0 {
            0.0
        } else {
            round2(self.total_hours / days as f64)
        }
    }
}
