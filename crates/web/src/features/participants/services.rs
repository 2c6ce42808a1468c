use sqlx::PgPool;
use storage::{
    dto::{
        participant::{CreateParticipantRequest, UpdateParticipantRequest},
        standings::ParticipantGroup,
    },
    error::Result,
    models::Participant,
    repository::{participant::ParticipantRepository, series::SeriesRepository},
};
use uuid::Uuid;

/// Participants of a series narrowed to `group`, in registration order
pub async fn list_participants(
    pool: &PgPool,
    series_id: Uuid,
    group: ParticipantGroup,
) -> Result<Vec<Participant>> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = ParticipantRepository::new(pool);
    let participants = repo.list(series_id).await?;
    Ok(group.select(participants))
}

pub async fn get_participant(
    pool: &PgPool,
    series_id: Uuid,
    participant_id: Uuid,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.find(series_id, participant_id).await
}

pub async fn create_participant(
    pool: &PgPool,
    series_id: Uuid,
    request: &CreateParticipantRequest,
) -> Result<Participant> {
    SeriesRepository::new(pool).find_by_id(series_id).await?;

    let repo = ParticipantRepository::new(pool);
    repo.create(series_id, request).await
}

pub async fn update_participant(
    pool: &PgPool,
    series_id: Uuid,
    participant_id: Uuid,
    request: &UpdateParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.update(series_id, participant_id, request).await
}

/// Delete a participant and all of their point entries
pub async fn delete_participant(pool: &PgPool, series_id: Uuid, participant_id: Uuid) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.delete(series_id, participant_id).await
}
