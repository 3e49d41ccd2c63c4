// src/export/model.rs

use crate::models::ranking::RankedEntry;
use crate::models::session::LongestSession;
use serde::Serialize;

/// Flat row for the attendance-ranking report.
/// Field order is the column order: user_id, time, days, average_per_day, rank.
#[derive(Serialize, Clone, Debug)]
pub struct RankingExport {
    pub user_id: String,
    pub time: f64,
    pub days: usize,
    pub average_per_day: f64,
    pub rank: usize,
}

impl From<&RankedEntry> for RankingExport {
    fn from(e: &RankedEntry) -> Self {
        Self {
            user_id: e.user_id.clone(),
            time: e.total_hours,
            days: e.days_present,
            average_per_day: e.average_per_day,
            rank: e.rank,
        }
    }
}

/// Header for the attendance-ranking report (CSV needs it even with no rows).
pub(crate) fn ranking_headers() -> Vec<&'static str> {
    vec!["user_id", "time", "days", "average_per_day", "rank"]
}

/// Flat row for the longest-session report. Exactly one row per run;
/// an empty user_id with 0 seconds means nobody closed a session.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub user_id: String,
    pub session_length: i64,
}

pub(crate) fn session_headers() -> Vec<&'static str> {
    vec!["user_id", "session_length"]
}

impl SessionExport {
    pub fn from_winner(winner: &Option<LongestSession>) -> Self {
        match winner {
            Some(w) => Self {
                user_id: w.user_id.clone(),
                session_length: w.seconds,
            },
            None => Self {
                user_id: String::new(),
                session_length: 0,
            },
        }
    }
}
