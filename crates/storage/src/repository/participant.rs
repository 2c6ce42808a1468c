use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::participant::{CreateParticipantRequest, UpdateParticipantRequest};
use crate::error::{Result, StorageError};
use crate::models::Participant;

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Participants of a series in registration order
    pub async fn list(&self, series_id: Uuid) -> Result<Vec<Participant>> {
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
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    pub async fn find(&self, series_id: Uuid, participant_id: Uuid) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, series_id, participant_type, boat_type,
                   boat_name, angler_name, created_at
            FROM series_participants
            WHERE series_id = $1 AND participant_id = $2
            "#,
        )
        .bind(series_id)
        .bind(participant_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    pub async fn create(
        &self,
        series_id: Uuid,
        req: &CreateParticipantRequest,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO series_participants
                (series_id, participant_type, boat_type, boat_name, angler_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING participant_id, series_id, participant_type, boat_type,
                      boat_name, angler_name, created_at
            "#,
        )
        .bind(series_id)
        .bind(req.participant_type)
        .bind(req.boat_type)
        .bind(&req.boat_name)
        .bind(&req.angler_name)
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }

    /// Partial update in one statement. A participant that is (or becomes) an
    /// angler always ends up without a boat type.
    pub async fn update(
        &self,
        series_id: Uuid,
        participant_id: Uuid,
        req: &UpdateParticipantRequest,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE series_participants
            SET
                participant_type = COALESCE($3, participant_type),
                boat_type = CASE
                    WHEN $4 OR COALESCE($3, participant_type) = 'angler' THEN NULL
                    ELSE COALESCE($5, boat_type)
                END,
                boat_name = CASE WHEN $6 THEN NULL ELSE COALESCE($7, boat_name) END,
                angler_name = CASE WHEN $8 THEN NULL ELSE COALESCE($9, angler_name) END
            WHERE series_id = $1 AND participant_id = $2
            RETURNING participant_id, series_id, participant_type, boat_type,
                      boat_name, angler_name, created_at
            "#,
        )
        .bind(series_id)
        .bind(participant_id)
        .bind(req.participant_type)
        .bind(req.clear_boat_type)
        .bind(req.boat_type)
        .bind(req.clear_boat_name)
        .bind(&req.boat_name)
        .bind(req.clear_angler_name)
        .bind(&req.angler_name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    pub async fn delete(&self, series_id: Uuid, participant_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM series_participants WHERE series_id = $1 AND participant_id = $2",
        )
        .bind(series_id)
        .bind(participant_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
