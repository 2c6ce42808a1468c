use sqlx::PgPool;
use storage::{
    dto::standings::{ParticipantGroup, StandingsResult},
    error::Result,
    repository::standings::StandingsRepository,
    services::compute_standings,
};
use uuid::Uuid;

/// Load a consistent snapshot of the series and rank the requested group.
/// Nothing is persisted; standings are recomputed on every call.
pub async fn get_standings(
    pool: &PgPool,
    series_id: Uuid,
    group: ParticipantGroup,
    category_id: Option<Uuid>,
) -> Result<StandingsResult> {
    let repo = StandingsRepository::new(pool);
    let snapshot = repo.load_snapshot(series_id, category_id).await?;

    let participants = group.select(snapshot.participants);
    let series = snapshot.series;

    let result = compute_standings(
        &series,
        &snapshot.events,
        &participants,
        &snapshot.entries,
        series.best_of_policy(),
        series.participation_points,
    );

    tracing::debug!(
        %series_id,
        group = group.as_str(),
        category_id = ?category_id,
        rows = result.standings.len(),
        "standings served"
    );

    Ok(result)
}
