use sqlx::PgPool;
use storage::{
    dto::series::{CreateSeriesRequest, UpdateSeriesRequest},
    error::Result,
    models::Series,
    repository::series::SeriesRepository,
};
use uuid::Uuid;

/// List all series
pub async fn list_series(pool: &PgPool) -> Result<Vec<Series>> {
    let repo = SeriesRepository::new(pool);
    repo.list().await
}

pub async fn get_series(pool: &PgPool, series_id: Uuid) -> Result<Series> {
    let repo = SeriesRepository::new(pool);
    repo.find_by_id(series_id).await
}

pub async fn create_series(pool: &PgPool, request: &CreateSeriesRequest) -> Result<Series> {
    let repo = SeriesRepository::new(pool);
    let series = repo.create(request).await?;
    tracing::info!(series_id = %series.series_id, name = %series.name, "series created");
    Ok(series)
}

pub async fn update_series(
    pool: &PgPool,
    series_id: Uuid,
    request: &UpdateSeriesRequest,
) -> Result<Series> {
    let repo = SeriesRepository::new(pool);
    repo.update(series_id, request).await
}

/// Delete a series and everything it owns
pub async fn delete_series(pool: &PgPool, series_id: Uuid) -> Result<()> {
    let repo = SeriesRepository::new(pool);
    repo.delete(series_id).await?;
    tracing::info!(%series_id, "series deleted");
    Ok(())
}
