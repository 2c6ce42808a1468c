use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::point_entry::{EventPointEntry, PointEntryFilter, UpsertPointEntryRequest};
use crate::error::{Result, StorageError};
use crate::models::PointEntry;

// Inserts only when event, participant and category all belong to the series;
// an existing (event, participant, category) row gets its points and note replaced.
const UPSERT_SQL: &str = r#"
    INSERT INTO series_points (series_id, event_id, participant_id, category_id, points, note)
    SELECT $1, e.event_id, p.participant_id, c.category_id, $5, $6
    FROM series_tournaments e, series_participants p, series_categories c
    WHERE e.series_id = $1 AND e.event_id = $2
      AND p.series_id = $1 AND p.participant_id = $3
      AND c.series_id = $1 AND c.category_id = $4
    ON CONFLICT (event_id, participant_id, category_id)
    DO UPDATE SET points = EXCLUDED.points, note = EXCLUDED.note, updated_at = now()
    RETURNING entry_id, series_id, event_id, participant_id, category_id,
              points, note, created_at, updated_at
"#;

struct PointKey {
    event_id: Uuid,
    participant_id: Uuid,
    category_id: Uuid,
}

pub struct PointEntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PointEntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, series_id: Uuid, filter: &PointEntryFilter) -> Result<Vec<PointEntry>> {
        let mut query = QueryBuilder::<Postgres>::new(
            r#"
            SELECT sp.entry_id, sp.series_id, sp.event_id, sp.participant_id, sp.category_id,
                   sp.points, sp.note, sp.created_at, sp.updated_at
            FROM series_points sp
            INNER JOIN series_tournaments e ON e.event_id = sp.event_id
            WHERE sp.series_id =
            "#,
        );
        query.push_bind(series_id);

        if let Some(event_id) = filter.event_id {
            query.push(" AND sp.event_id = ");
            query.push_bind(event_id);
        }

        if let Some(category_id) = filter.category_id {
            query.push(" AND sp.category_id = ");
            query.push_bind(category_id);
        }

        if let Some(participant_id) = filter.participant_id {
            query.push(" AND sp.participant_id = ");
            query.push_bind(participant_id);
        }

        query.push(" ORDER BY e.event_number, sp.participant_id, sp.category_id");

        let entries = query.build_query_as::<PointEntry>().fetch_all(self.pool).await?;

        Ok(entries)
    }

    /// Write one entry. Fails with `NotFound` if the event, participant or
    /// category is not part of the series.
    pub async fn upsert(&self, series_id: Uuid, req: &UpsertPointEntryRequest) -> Result<PointEntry> {
        let key = PointKey {
            event_id: req.event_id,
            participant_id: req.participant_id,
            category_id: req.category_id,
        };

        let entry = upsert_with(self.pool, series_id, &key, req.points, req.note.as_deref())
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Write the results of one event atomically: either every entry is
    /// stored or none is.
    pub async fn upsert_event(
        &self,
        series_id: Uuid,
        event_id: Uuid,
        entries: &[EventPointEntry],
    ) -> Result<Vec<PointEntry>> {
        let mut tx = self.pool.begin().await?;
        let mut written = Vec::with_capacity(entries.len());

        for item in entries {
            let key = PointKey {
                event_id,
                participant_id: item.participant_id,
                category_id: item.category_id,
            };

            let entry = upsert_with(&mut *tx, series_id, &key, item.points, item.note.as_deref())
                .await?
                .ok_or(StorageError::NotFound)?;
            written.push(entry);
        }

        tx.commit().await?;

        Ok(written)
    }

    pub async fn delete(&self, series_id: Uuid, entry_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM series_points WHERE series_id = $1 AND entry_id = $2")
            .bind(series_id)
            .bind(entry_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

async fn upsert_with<'e, E>(
    executor: E,
    series_id: Uuid,
    key: &PointKey,
    points: Decimal,
    note: Option<&str>,
) -> Result<Option<PointEntry>>
where
    E: Executor<'e, Database = Postgres>,
{
    let entry = sqlx::query_as::<_, PointEntry>(UPSERT_SQL)
        .bind(series_id)
        .bind(key.event_id)
        .bind(key.participant_id)
        .bind(key.category_id)
        .bind(points)
        .bind(note)
        .fetch_optional(executor)
        .await?;

    Ok(entry)
}
