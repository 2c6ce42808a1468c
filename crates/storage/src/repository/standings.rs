use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Participant, PointEntry, Series, SeriesEvent};

/// Everything the standings engine needs for one series, read from a single
/// snapshot.
#[derive(Debug, Clone)]
pub struct StandingsSnapshot {
    pub series: Series,
    /// Ordered by event number.
    pub events: Vec<SeriesEvent>,
    /// Every participant of the series; group filtering happens afterwards.
    pub participants: Vec<Participant>,
    /// Narrowed to `category_id` when one was requested.
    pub entries: Vec<PointEntry>,
}

pub struct StandingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StandingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn load_snapshot(
        &self,
        series_id: Uuid,
        category_id: Option<Uuid>,
    ) -> Result<StandingsSnapshot> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let series = sqlx::query_as::<_, Series>(
            r#"
            SELECT series_id, name, description, best_of, participation_points,
                   total_events, created_at, updated_at
            FROM series
            WHERE series_id = $1
            "#,
        )
        .bind(series_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        if let Some(category_id) = category_id {
            sqlx::query_scalar::<_, Uuid>(
                "SELECT category_id FROM series_categories WHERE series_id = $1 AND category_id = $2",
            )
            .bind(series_id)
            .bind(category_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StorageError::NotFound)?;
        }

        let events = sqlx::query_as::<_, SeriesEvent>(
            r#"
            SELECT event_id, series_id, tournament_id, event_number, event_date, name, created_at
            FROM series_tournaments
            WHERE series_id = $1
            ORDER BY event_number
            "#,
        )
        .bind(series_id)
        .fetch_all(&mut *tx)
        .await?;

        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, series_id, participant_type, boat_type,
                   boat_name, angler_name, created_at
            FROM series_participants
            WHERE series_id = $1
            ORDER BY created_at, participant_id
            "#,
        )
        .bind(series_id)
        .fetch_all(&mut *tx)
        .await?;

        let mut query = QueryBuilder::<Postgres>::new(
            r#"
            SELECT entry_id, series_id, event_id, participant_id, category_id,
                   points, note, created_at, updated_at
            FROM series_points
            WHERE series_id =
            "#,
        );
        query.push_bind(series_id);
        if let Some(category_id) = category_id {
            query.push(" AND category_id = ");
            query.push_bind(category_id);
        }
        let entries = query
            .build_query_as::<PointEntry>()
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(StandingsSnapshot {
            series,
            events,
            participants,
            entries,
        })
    }
}
