use super::event_type::EventType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single badge swipe, as read from one input record.
#[derive(Debug, Clone, Serialize)]
pub struct GateEvent {
    pub user_id: String,
    pub timestamp: DateTime<Utc>, // millisecond precision, UTC
    pub kind: EventType,
}

impl GateEvent {
    pub fn new(user_id: impl Into<String>, timestamp: DateTime<Utc>, kind: EventType) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp,
            kind,
        }
    }
}
