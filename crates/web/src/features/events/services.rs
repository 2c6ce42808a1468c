use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, UpdateEventRequest},
    error::Result,
    models::SeriesEvent,
    repository::{event::EventRepository, series::SeriesRepository},
};
use uuid::Uuid;

/// Events of a series ordered by event number
pub async fn list_events(pool: &PgPool, series_id: Uuid) -> Result<Vec<SeriesEvent>> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = EventRepository::new(pool);
    repo.list(series_id).await
}

pub async fn get_event(pool: &PgPool, series_id: Uuid, event_id: Uuid) -> Result<SeriesEvent> {
    let repo = EventRepository::new(pool);
    repo.find(series_id, event_id).await
}

pub async fn create_event(
    pool: &PgPool,
    series_id: Uuid,
    request: &CreateEventRequest,
) -> Result<SeriesEvent> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = EventRepository::new(pool);
    let event = repo.create(series_id, request).await?;
    tracing::info!(
        %series_id,
        event_id = %event.event_id,
        event_number = event.event_number,
        "event added to series"
    );
    Ok(event)
}

pub async fn update_event(
    pool: &PgPool,
    series_id: Uuid,
    event_id: Uuid,
    request: &UpdateEventRequest,
) -> Result<SeriesEvent> {
    let repo = EventRepository::new(pool);
    repo.update(series_id, event_id, request).await
}

pub async fn delete_event(pool: &PgPool, series_id: Uuid, event_id: Uuid) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.delete(series_id, event_id).await
}
