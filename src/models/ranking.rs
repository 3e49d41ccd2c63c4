use serde::Serialize;

/// One row of the attendance ranking. Derived, read-only.
/// `rank` is dense and 1-based, 1 = highest average.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub user_id: String,
    pub total_hours: f64,
    pub days_present: usize,
    pub average_per_day: f64,
    pub rank: usize,
}
