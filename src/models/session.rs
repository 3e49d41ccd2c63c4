use chrono::{DateTime, Utc};
use serde::Serialize;

/// A closed presence interval for one user.
/// Maximal: consecutive out→in gaps inside it stay under the break threshold.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Session {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Session {
    /// Duration in whole seconds (end − start).
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// Global winner of the longest-session search.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LongestSession {
    pub user_id: String,
    pub seconds: i64,
}
