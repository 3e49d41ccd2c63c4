//! Target-month selection over the raw event list.

use crate::errors::{AppError, AppResult};
use crate::models::event::GateEvent;
use crate::utils::date::month_name;
use chrono::Datelike;
use regex::Regex;

/// The single month the whole analysis is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMonth {
    pub year: i32,
    pub month: u32,
}

impl TargetMonth {
    /// Parse "YYYY-MM" (e.g. "2023-02").
    pub fn parse(p: &str) -> AppResult<Self> {
        let re = Regex::new(r"^\d{4}-\d{2}$").map_err(|e| AppError::Other(e.to_string()))?;
        if !re.is_match(p) {
            return Err(AppError::InvalidMonth(p.to_string()));
        }

        let year: i32 = p[0..4]
            .parse()
            .map_err(|_| AppError::InvalidMonth(p.to_string()))?;
        let month: u32 = p[5..7]
            .parse()
            .map_err(|_| AppError::InvalidMonth(p.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(p.to_string()));
        }

        Ok(Self { year, month })
    }

    pub fn contains(&self, ev: &GateEvent) -> bool {
        ev.timestamp.year() == self.year && ev.timestamp.month() == self.month
    }

    /// es: "February 2023"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Keep only the events whose timestamp falls inside `month`. No side effects.
pub fn filter_month(events: &[GateEvent], month: &TargetMonth) -> Vec<GateEvent> {
    events
        .iter()
        .filter(|ev| month.contains(ev))
        .cloned()
        .collect()
}
