mod common;
use common::ev;
use gatestats::core::attendance::aggregate;
use gatestats::core::rank::rank_users;
use gatestats::models::event_type::EventType::{GateIn, GateOut};

const EPS: f64 = 1e-9;

#[test]
fn test_ranks_are_dense_and_sorted_by_average() {
    // u_a: 8h/day, u_b: 4h/day, u_c: 6h/day.
    let events = vec![
        ev("u_a", "2023-02-01T09:00:00.000000Z", GateIn),
        ev("u_a", "2023-02-01T17:00:00.000000Z", GateOut),
        ev("u_b", "2023-02-01T09:00:00.000000Z", GateIn),
        ev("u_b", "2023-02-01T13:00:00.000000Z", GateOut),
        ev("u_c", "2023-02-01T09:00:00.000000Z", GateIn),
        ev("u_c", "2023-02-01T15:00:00.000000Z", GateOut),
    ];

    let ranking = rank_users(&aggregate(&events));

    let order: Vec<(&str, usize)> = ranking
        .iter()
        .map(|e| (e.user_id.as_str(), e.rank))
        .collect();
    assert_eq!(order, vec![("u_a", 1), ("u_c", 2), ("u_b", 3)]);

    for (i, entry) in ranking.iter().enumerate() {
        assert_eq!(entry.rank, i + 1);
    }
    for pair in ranking.windows(2) {
        assert!(pair[0].average_per_day >= pair[1].average_per_day);
    }
}

#[test]
fn test_average_is_zero_without_days_present() {
    // Only an unmatched IN: no day, average defined as 0.
    let events = vec![ev("u1", "2023-02-01T09:00:00.000000Z", GateIn)];

    let ranking = rank_users(&aggregate(&events));

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].days_present, 0);
    assert!(ranking[0].average_per_day.abs() < EPS);
    assert_eq!(ranking[0].rank, 1);
}

#[test]
fn test_ties_break_by_user_id() {
    // Same 8h/day average for both users.
    let events = vec![
        ev("zeta", "2023-02-01T09:00:00.000000Z", GateIn),
        ev("zeta", "2023-02-01T17:00:00.000000Z", GateOut),
        ev("alfa", "2023-02-02T09:00:00.000000Z", GateIn),
        ev("alfa", "2023-02-02T17:00:00.000000Z", GateOut),
    ];

    let ranking = rank_users(&aggregate(&events));

    assert_eq!(ranking[0].user_id, "alfa");
    assert_eq!(ranking[0].rank, 1);
    assert_eq!(ranking[1].user_id, "zeta");
    assert_eq!(ranking[1].rank, 2);
}

#[test]
fn test_average_rounded_to_two_decimals() {
    // 7h40m over one day: 7.666... rounds to 7.67.
    let events = vec![
        ev("u1", "2023-02-01T09:00:00.000000Z", GateIn),
        ev("u1", "2023-02-01T16:40:00.000000Z", GateOut),
    ];

    let ranking = rank_users(&aggregate(&events));

    assert!((ranking[0].average_per_day - 7.67).abs() < EPS);
}

#[test]
fn test_average_over_multiple_days() {
    // 8h + 6h over two days → 7.0 average.
    let events = vec![
        ev("u1", "2023-02-01T09:00:00.000000Z", GateIn),
        ev("u1", "2023-02-01T17:00:00.000000Z", GateOut),
        ev("u1", "2023-02-02T09:00:00.000000Z", GateIn),
        ev("u1", "2023-02-02T15:00:00.000000Z", GateOut),
    ];

    let ranking = rank_users(&aggregate(&events));

    assert_eq!(ranking[0].days_present, 2);
    assert!((ranking[0].average_per_day - 7.0).abs() < EPS);
    assert!((ranking[0].total_hours - 14.0).abs() < EPS);
}

#[test]
fn test_empty_input_yields_empty_ranking() {
    let ranking = rank_users(&aggregate(&[]));
    assert!(ranking.is_empty());
}
