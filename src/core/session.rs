//! Session reconstruction: contiguous presence intervals per user, and the
//! single longest one across the whole dataset.

use crate::core::attendance::group_by_user;
use crate::models::event::GateEvent;
use crate::models::event_type::EventType;
use crate::models::session::{LongestSession, Session};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// An out→in gap of at least this long splits two sessions.
pub const SESSION_BREAK_HOURS: i64 = 2;

/// Rebuild one user's closed sessions from their chronological swipe list.
///
/// `start` tracks the open session, `last_out` the most recent GATE_OUT.
/// A GATE_IN while a session is open only re-opens at the new timestamp when
/// the gap since `last_out` reaches the break threshold; a GATE_OUT never
/// closes anything by itself. A session still open at end of input closes at
/// `last_out`, when one exists.
pub fn build_sessions(events: &[(DateTime<Utc>, EventType)]) -> Vec<Session> {
    let session_break = Duration::hours(SESSION_BREAK_HOURS);

    let mut sessions = Vec::new();
    let mut start: Option<DateTime<Utc>> = None;
    let mut last_out: Option<DateTime<Utc>> = None;

    for &(timestamp, kind) in events {
        match kind {
            EventType::GateIn => {
                if let Some(open) = start {
                    if let Some(out) = last_out
                        && timestamp - out >= session_break
                    {
                        sessions.push(Session {
                            start: open,
                            end: out,
                        });
                        start = Some(timestamp);
                    }
                } else {
                    start = Some(timestamp);
                }
            }
            EventType::GateOut => {
                last_out = Some(timestamp);
            }
        }
    }

    if let (Some(open), Some(out)) = (start, last_out) {
        sessions.push(Session {
            start: open,
            end: out,
        });
    }

    sessions
}

/// Session lists for every user in the filtered event set.
pub fn sessions_per_user(events: &[GateEvent]) -> BTreeMap<String, Vec<Session>> {
    group_by_user(events)
        .into_iter()
        .map(|(user_id, evs)| (user_id, build_sessions(&evs)))
        .collect()
}

/// The user with the globally longest session.
///
/// Longest-per-user is the max duration over that user's closed sessions
/// (0 when none closed). The global comparison is strict `>`, so on a tie
/// the first user in iteration order (user_id ascending) keeps the crown.
/// `None` when no user closed any session.
pub fn longest_session(events: &[GateEvent]) -> Option<LongestSession> {
    let mut winner: Option<LongestSession> = None;
    let mut max_seconds: i64 = 0;

    for (user_id, sessions) in sessions_per_user(events) {
        let user_max = sessions.iter().map(Session::seconds).max().unwrap_or(0);

        if user_max > max_seconds {
            max_seconds = user_max;
            winner = Some(LongestSession {
                user_id,
                seconds: user_max,
            });
        }
    }

    winner
}
