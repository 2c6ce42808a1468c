use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use storage::models::{BestOf, Participant, ParticipantType, PointEntry, Series, SeriesEvent};
use storage::services::compute_standings;
use uuid::Uuid;

struct Fixture {
    series: Series,
    events: Vec<SeriesEvent>,
    participants: Vec<Participant>,
    entries: Vec<PointEntry>,
}

/// `scores[p][e][c]` is the points of participant `p` at event `e` in category `c`,
/// in hundredths. `None` means no entry was recorded.
fn fixture(scores: &[Vec<Vec<Option<u32>>>], event_count: usize) -> Fixture {
    let series = Series {
        series_id: Uuid::new_v4(),
        name: "Property Series".to_string(),
        description: None,
        best_of: None,
        participation_points: Decimal::ZERO,
        total_events: None,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    };

    let events: Vec<SeriesEvent> = (0..event_count)
        .map(|n| SeriesEvent {
            event_id: Uuid::new_v4(),
            series_id: series.series_id,
            tournament_id: None,
            event_number: n as i32 + 1,
            event_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            name: None,
            created_at: NaiveDateTime::default(),
        })
        .collect();

    let categories: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();

    let mut participants = Vec::new();
    let mut entries = Vec::new();
    for (index, per_event) in scores.iter().enumerate() {
        let participant = Participant {
            participant_id: Uuid::new_v4(),
            series_id: series.series_id,
            participant_type: ParticipantType::Angler,
            boat_type: None,
            boat_name: None,
            angler_name: Some(format!("Angler {index}")),
            created_at: NaiveDateTime::default(),
        };

        for (event, per_category) in events.iter().zip(per_event) {
            for (category_id, points) in categories.iter().zip(per_category) {
                if let Some(points) = points {
                    entries.push(PointEntry {
                        entry_id: Uuid::new_v4(),
                        series_id: series.series_id,
                        event_id: event.event_id,
                        participant_id: participant.participant_id,
                        category_id: *category_id,
                        points: Decimal::new(*points as i64, 2),
                        note: None,
                        created_at: NaiveDateTime::default(),
                        updated_at: NaiveDateTime::default(),
                    });
                }
            }
        }

        participants.push(participant);
    }

    Fixture {
        series,
        events,
        participants,
        entries,
    }
}

fn scores_strategy() -> impl Strategy<Value = (Vec<Vec<Vec<Option<u32>>>>, usize)> {
    (0usize..6).prop_flat_map(|event_count| {
        let category = proptest::option::weighted(0.7, 0u32..50_000);
        let event = proptest::collection::vec(category, 3);
        let participant = proptest::collection::vec(event, event_count);
        (proptest::collection::vec(participant, 0..8), Just(event_count))
    })
}

fn best_of_strategy() -> impl Strategy<Value = BestOf> {
    prop_oneof![Just(BestOf::All), (1usize..8).prop_map(BestOf::Top)]
}

proptest! {
    #[test]
    fn one_row_per_participant(
        (scores, event_count) in scores_strategy(),
        best_of in best_of_strategy(),
        bonus in 0i64..100,
    ) {
        let f = fixture(&scores, event_count);
        let result = compute_standings(&f.series, &f.events, &f.participants, &f.entries, best_of, Decimal::from(bonus));

        prop_assert_eq!(result.standings.len(), f.participants.len());
        let mut ids: Vec<Uuid> = result.standings.iter().map(|s| s.participant.participant_id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), f.participants.len());

        let ranks: Vec<u32> = result.standings.iter().map(|s| s.rank).collect();
        let expected: Vec<u32> = (1..=f.participants.len() as u32).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn events_fished_is_bounded_and_tracks_positive_totals(
        (scores, event_count) in scores_strategy(),
        best_of in best_of_strategy(),
    ) {
        let f = fixture(&scores, event_count);
        let result = compute_standings(&f.series, &f.events, &f.participants, &f.entries, best_of, Decimal::ZERO);

        for row in &result.standings {
            prop_assert!(row.events_fished as usize <= event_count);
            prop_assert_eq!(row.per_event.len(), event_count);
            let all_zero = row.per_event.values().all(|score| score.points.is_zero());
            prop_assert_eq!(row.events_fished == 0, all_zero);
        }
    }

    #[test]
    fn aggregate_minus_best_of_is_the_excluded_totals(
        (scores, event_count) in scores_strategy(),
        best_of in best_of_strategy(),
        bonus in 0i64..100,
    ) {
        let f = fixture(&scores, event_count);
        let result = compute_standings(&f.series, &f.events, &f.participants, &f.entries, best_of, Decimal::from(bonus));
        let slots = best_of.slots(event_count);

        for row in &result.standings {
            prop_assert!(row.best_of_score <= row.aggregate);

            let mut totals: Vec<Decimal> = row.per_event.values().map(|score| score.points).collect();
            totals.sort_by(|a, b| b.cmp(a));
            let excluded: Decimal = totals.iter().skip(slots).copied().sum();
            prop_assert_eq!(row.aggregate - row.best_of_score, excluded);

            let counted = row.per_event.values().filter(|score| score.counted).count();
            prop_assert!(counted <= slots);
            prop_assert_eq!(counted, row.counted_event_ids.len());
            prop_assert!(row.per_event.values().filter(|score| score.counted).all(|score| score.points > Decimal::ZERO));
        }
    }

    #[test]
    fn recomputation_is_deterministic(
        (scores, event_count) in scores_strategy(),
        best_of in best_of_strategy(),
    ) {
        let f = fixture(&scores, event_count);
        let first = compute_standings(&f.series, &f.events, &f.participants, &f.entries, best_of, Decimal::ONE);
        let second = compute_standings(&f.series, &f.events, &f.participants, &f.entries, best_of, Decimal::ONE);

        let order = |rows: &[storage::dto::standings::StandingEntry]| {
            rows.iter().map(|s| (s.participant.participant_id, s.rank)).collect::<Vec<_>>()
        };
        prop_assert_eq!(order(&first.standings[..]), order(&second.standings[..]));

        for pair in first.standings.windows(2) {
            prop_assert!(
                (pair[0].best_of_score, pair[0].aggregate) >= (pair[1].best_of_score, pair[1].aggregate)
            );
        }
    }
}

#[test]
fn event_without_points_is_never_counted() {
    let scores = vec![
        vec![vec![Some(500), None, None], vec![Some(0), Some(0), None]],
        vec![vec![None, Some(700), None], vec![None, None, None]],
    ];
    let f = fixture(&scores, 2);
    let quiet_event = f.events[1].event_id;

    let result = compute_standings(&f.series, &f.events, &f.participants, &f.entries, BestOf::Top(2), Decimal::from(10));

    for row in &result.standings {
        assert_eq!(row.per_event[&quiet_event].points, Decimal::ZERO);
        assert!(!row.per_event[&quiet_event].counted);
        assert!(!row.counted_event_ids.contains(&quiet_event));
    }
}

#[test]
fn standings_serialize_numbers_as_json_numbers() {
    let scores = vec![vec![vec![Some(1250), None, None]]];
    let f = fixture(&scores, 1);
    let result = compute_standings(&f.series, &f.events, &f.participants, &f.entries, BestOf::All, Decimal::ZERO);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["best_of"].is_null());
    let row = &json["standings"][0];
    assert_eq!(row["rank"], 1);
    assert_eq!(row["best_of_score"].as_f64(), Some(12.5));
    assert_eq!(row["display_name"], "Angler 0");

    let event_key = f.events[0].event_id.to_string();
    assert_eq!(row["per_event"][&event_key]["counted"], true);
}
