use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::standings::{EventScore, StandingEntry, StandingsResult};
use crate::models::{BestOf, Participant, PointEntry, Series, SeriesEvent};

/// Computes the leaderboard for one series.
///
/// `events` must already be ordered by `event_number`; that order breaks ties
/// when choosing which events count. `participants` and `point_entries` must
/// already be narrowed to the requested group and category. Rows that belong
/// to another series are ignored.
pub fn compute_standings(
    series: &Series,
    events: &[SeriesEvent],
    participants: &[Participant],
    point_entries: &[PointEntry],
    best_of: BestOf,
    participation_points: Decimal,
) -> StandingsResult {
    let events: Vec<&SeriesEvent> = events
        .iter()
        .filter(|event| event.series_id == series.series_id)
        .collect();
    let slots = best_of.slots(events.len());

    let mut totals: HashMap<(Uuid, Uuid), Decimal> = HashMap::new();
    for entry in point_entries
        .iter()
        .filter(|entry| entry.series_id == series.series_id)
    {
        *totals
            .entry((entry.participant_id, entry.event_id))
            .or_default() += entry.points;
    }

    let mut standings: Vec<StandingEntry> = participants
        .iter()
        .filter(|participant| participant.series_id == series.series_id)
        .map(|participant| score_participant(participant, &events, &totals, slots, participation_points))
        .collect();

    // sort_by is stable: full ties keep the caller's participant order.
    standings.sort_by(|a, b| {
        b.best_of_score
            .cmp(&a.best_of_score)
            .then_with(|| b.aggregate.cmp(&a.aggregate))
    });

    for (position, entry) in standings.iter_mut().enumerate() {
        entry.rank = position as u32 + 1;
    }

    tracing::debug!(
        series_id = %series.series_id,
        events = events.len(),
        participants = standings.len(),
        "computed standings"
    );

    StandingsResult {
        series: series.clone(),
        events: events.into_iter().cloned().collect(),
        standings,
        best_of: best_of.as_option(),
    }
}

fn score_participant(
    participant: &Participant,
    events: &[&SeriesEvent],
    totals: &HashMap<(Uuid, Uuid), Decimal>,
    slots: usize,
    participation_points: Decimal,
) -> StandingEntry {
    let event_totals: Vec<(Uuid, Decimal)> = events
        .iter()
        .map(|event| {
            let total = totals
                .get(&(participant.participant_id, event.event_id))
                .copied()
                .unwrap_or_default();
            (event.event_id, total)
        })
        .collect();

    let events_fished = event_totals
        .iter()
        .filter(|(_, total)| *total > Decimal::ZERO)
        .count() as u32;

    let mut ranked = event_totals.clone();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let selected = &ranked[..slots.min(ranked.len())];

    let counted_event_ids: Vec<Uuid> = selected
        .iter()
        .filter(|(_, total)| *total > Decimal::ZERO)
        .map(|(event_id, _)| *event_id)
        .collect();

    let bonus = Decimal::from(events_fished) * participation_points;
    let best_of_score = selected.iter().map(|(_, total)| *total).sum::<Decimal>() + bonus;
    let aggregate = event_totals.iter().map(|(_, total)| *total).sum::<Decimal>() + bonus;

    let per_event = event_totals
        .iter()
        .map(|(event_id, total)| {
            let score = EventScore {
                points: *total,
                counted: counted_event_ids.contains(event_id),
            };
            (*event_id, score)
        })
        .collect();

    StandingEntry {
        rank: 0,
        participant: participant.clone(),
        display_name: participant.display_name().to_string(),
        best_of_score,
        aggregate,
        events_fished,
        counted_event_ids,
        per_event,
    }
}
