//! Ranking of users by average hours per present day.

use crate::models::attendance::UserAttendance;
use crate::models::ranking::RankedEntry;
use std::collections::BTreeMap;

/// Sort users by average_per_day descending and assign dense 1-based ranks.
/// Ties break by user_id ascending, so the order is fully deterministic.
pub fn rank_users(user_data: &BTreeMap<String, UserAttendance>) -> Vec<RankedEntry> {
    let mut result: Vec<RankedEntry> = user_data
        .iter()
        .map(|(user_id, values)| RankedEntry {
            user_id: user_id.clone(),
            total_hours: values.total_hours,
            days_present: values.days_present(),
            average_per_day: values.average_per_day(),
            rank: 0,
        })
        .collect();

    result.sort_by(|a, b| {
        b.average_per_day
            .total_cmp(&a.average_per_day)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    for (index, entry) in result.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    result
}
