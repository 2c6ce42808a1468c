use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::series::{CreateSeriesRequest, UpdateSeriesRequest};
use crate::error::{Result, StorageError};
use crate::models::Series;

/// Repository for Series database operations
pub struct SeriesRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeriesRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all series, newest first
    pub async fn list(&self) -> Result<Vec<Series>> {
        let series = sqlx::query_as::<_, Series>(
            r#"
            SELECT series_id, name, description, best_of, participation_points,
                   total_events, created_at, updated_at
            FROM series
            ORDER BY created_at DESC, name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(series)
    }

    pub async fn find_by_id(&self, series_id: Uuid) -> Result<Series> {
        let series = sqlx::query_as::<_, Series>(
            r#"
            SELECT series_id, name, description, best_of, participation_points,
                   total_events, created_at, updated_at
            FROM series
            WHERE series_id = $1
            "#,
        )
        .bind(series_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(series)
    }

    pub async fn create(&self, req: &CreateSeriesRequest) -> Result<Series> {
        let series = sqlx::query_as::<_, Series>(
            r#"
            INSERT INTO series (name, description, best_of, participation_points, total_events)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING series_id, name, description, best_of, participation_points,
                      total_events, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.best_of)
        .bind(req.participation_points.unwrap_or(Decimal::ZERO))
        .bind(req.total_events)
        .fetch_one(self.pool)
        .await?;

        Ok(series)
    }

    /// Partial update in one statement: absent fields keep their stored value,
    /// `count_all_events` and the `clear_*` flags null their column.
    pub async fn update(&self, series_id: Uuid, req: &UpdateSeriesRequest) -> Result<Series> {
        let series = sqlx::query_as::<_, Series>(
            r#"
            UPDATE series
            SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN NULL ELSE COALESCE($4, description) END,
                best_of = CASE WHEN $5 THEN NULL ELSE COALESCE($6, best_of) END,
                participation_points = COALESCE($7, participation_points),
                total_events = CASE WHEN $8 THEN NULL ELSE COALESCE($9, total_events) END,
                updated_at = now()
            WHERE series_id = $1
            RETURNING series_id, name, description, best_of, participation_points,
                      total_events, created_at, updated_at
            "#,
        )
        .bind(series_id)
        .bind(&req.name)
        .bind(req.clear_description)
        .bind(&req.description)
        .bind(req.count_all_events)
        .bind(req.best_of)
        .bind(req.participation_points)
        .bind(req.clear_total_events)
        .bind(req.total_events)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(series)
    }

    /// Delete a series together with its events, categories, participants and points
    pub async fn delete(&self, series_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM series WHERE series_id = $1")
            .bind(series_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
