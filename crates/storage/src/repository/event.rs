use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::SeriesEvent;

const DUPLICATE_EVENT_NUMBER: &str = "Event number already exists in this series";
const UNKNOWN_TOURNAMENT: &str = "Referenced tournament does not exist";

/// Repository for the events (`series_tournaments`) of a series
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Events of a series ordered by event number
    pub async fn list(&self, series_id: Uuid) -> Result<Vec<SeriesEvent>> {
        let events = sqlx::query_as::<_, SeriesEvent>(
            r#"
            SELECT event_id, series_id, tournament_id, event_number, event_date, name, created_at
            FROM series_tournaments
            WHERE series_id = $1
            ORDER BY event_number
            "#,
        )
        .bind(series_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find(&self, series_id: Uuid, event_id: Uuid) -> Result<SeriesEvent> {
        let event = sqlx::query_as::<_, SeriesEvent>(
            r#"
            SELECT event_id, series_id, tournament_id, event_number, event_date, name, created_at
            FROM series_tournaments
            WHERE series_id = $1 AND event_id = $2
            "#,
        )
        .bind(series_id)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, series_id: Uuid, req: &CreateEventRequest) -> Result<SeriesEvent> {
        let event = sqlx::query_as::<_, SeriesEvent>(
            r#"
            INSERT INTO series_tournaments (series_id, tournament_id, event_number, event_date, name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING event_id, series_id, tournament_id, event_number, event_date, name, created_at
            "#,
        )
        .bind(series_id)
        .bind(req.tournament_id)
        .bind(req.event_number)
        .bind(req.event_date)
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages(DUPLICATE_EVENT_NUMBER, UNKNOWN_TOURNAMENT)
        })?;

        Ok(event)
    }

    pub async fn update(
        &self,
        series_id: Uuid,
        event_id: Uuid,
        req: &UpdateEventRequest,
    ) -> Result<SeriesEvent> {
        let event = sqlx::query_as::<_, SeriesEvent>(
            r#"
            UPDATE series_tournaments
            SET
                tournament_id = CASE WHEN $3 THEN NULL ELSE COALESCE($4, tournament_id) END,
                event_number = COALESCE($5, event_number),
                event_date = COALESCE($6, event_date),
                name = CASE WHEN $7 THEN NULL ELSE COALESCE($8, name) END
            WHERE series_id = $1 AND event_id = $2
            RETURNING event_id, series_id, tournament_id, event_number, event_date, name, created_at
            "#,
        )
        .bind(series_id)
        .bind(event_id)
        .bind(req.unlink_tournament)
        .bind(req.tournament_id)
        .bind(req.event_number)
        .bind(req.event_date)
        .bind(req.clear_name)
        .bind(&req.name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_messages(DUPLICATE_EVENT_NUMBER, UNKNOWN_TOURNAMENT)
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Delete an event and every point entry recorded for it
    pub async fn delete(&self, series_id: Uuid, event_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM series_tournaments WHERE series_id = $1 AND event_id = $2")
                .bind(series_id)
                .bind(event_id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
