//! Attendance aggregation: pair GATE_IN→GATE_OUT per user into total hours
//! and distinct days present.

use crate::models::attendance::UserAttendance;
use crate::models::event::GateEvent;
use crate::models::event_type::EventType;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Build the per-user attendance mapping from the filtered event list.
///
/// Each user's events are sorted by timestamp (stable) before the pairing
/// walk, so input order never changes the result. The returned map iterates
/// in user_id order.
pub fn aggregate(events: &[GateEvent]) -> BTreeMap<String, UserAttendance> {
    let mut user_data: BTreeMap<String, UserAttendance> = BTreeMap::new();

    for (user_id, evs) in group_by_user(events) {
        let att = user_data.entry(user_id).or_default();
        for (timestamp, kind) in evs {
            att.record(kind, timestamp);
        }
    }

    user_data
}

/// Group events per user and sort each user's swipes chronologically.
/// Shared precondition of the pairing walks (attendance and sessions).
pub fn group_by_user(
    events: &[GateEvent],
) -> BTreeMap<String, Vec<(DateTime<Utc>, EventType)>> {
    let mut per_user: BTreeMap<String, Vec<(DateTime<Utc>, EventType)>> = BTreeMap::new();

    for ev in events {
        per_user
            .entry(ev.user_id.clone())
            .or_default()
            .push((ev.timestamp, ev.kind));
    }

    for evs in per_user.values_mut() {
        evs.sort_by_key(|(ts, _)| *ts);
    }

    per_user
}
