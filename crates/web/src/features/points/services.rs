use sqlx::PgPool;
use storage::{
    dto::point_entry::{BulkPointEntryRequest, PointEntryFilter, UpsertPointEntryRequest},
    error::Result,
    models::PointEntry,
    repository::{point_entry::PointEntryRepository, series::SeriesRepository},
};
use uuid::Uuid;

pub async fn list_points(
    pool: &PgPool,
    series_id: Uuid,
    filter: &PointEntryFilter,
) -> Result<Vec<PointEntry>> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = PointEntryRepository::new(pool);
    repo.list(series_id, filter).await
}

/// Record points for one (event, participant, category), replacing an existing entry
pub async fn upsert_points(
    pool: &PgPool,
    series_id: Uuid,
    request: &UpsertPointEntryRequest,
) -> Result<PointEntry> {
    let repo = PointEntryRepository::new(pool);
    let entry = repo.upsert(series_id, request).await?;
    tracing::debug!(
        %series_id,
        entry_id = %entry.entry_id,
        event_id = %entry.event_id,
        participant_id = %entry.participant_id,
        points = %entry.points,
        "point entry written"
    );
    Ok(entry)
}

/// Record a whole event's results in one transaction
pub async fn upsert_event_points(
    pool: &PgPool,
    series_id: Uuid,
    event_id: Uuid,
    request: &BulkPointEntryRequest,
) -> Result<Vec<PointEntry>> {
    let repo = PointEntryRepository::new(pool);
    let entries = repo.upsert_event(series_id, event_id, &request.entries).await?;
    tracing::info!(%series_id, %event_id, count = entries.len(), "event results written");
    Ok(entries)
}

pub async fn delete_points(pool: &PgPool, series_id: Uuid, entry_id: Uuid) -> Result<()> {
    let repo = PointEntryRepository::new(pool);
    repo.delete(series_id, entry_id).await
}
