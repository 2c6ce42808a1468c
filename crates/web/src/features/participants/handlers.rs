use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        participant::{CreateParticipantRequest, UpdateParticipantRequest},
        standings::ParticipantFilter,
    },
    models::Participant,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path, Query};

use super::services;

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/participants",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ParticipantFilter
    ),
    responses(
        (status = 200, description = "Participants in the requested group", body = Vec<Participant>),
        (status = 400, description = "Unknown group"),
        (status = 404, description = "Series not found")
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Query(filter): Query<ParticipantFilter>,
) -> Result<Json<Vec<Participant>>, WebError> {
    let group = filter.validate().map_err(WebError::BadRequest)?;

    let participants = services::list_participants(db.pool(), series_id, group).await?;

    Ok(Json(participants))
}

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/participants/{participant_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("participant_id" = Uuid, Path, description = "Participant id")
    ),
    responses(
        (status = 200, description = "Participant found", body = Participant),
        (status = 404, description = "Participant not found in this series")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    Path((series_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let participant = services::get_participant(db.pool(), series_id, participant_id).await?;

    Ok(Json(participant).into_response())
}

#[utoipa::path(
    post,
    path = "/api/series/{series_id}/participants",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Participant registered", body = Participant),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Series not found")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_kind()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let participant = services::create_participant(db.pool(), series_id, &req).await?;

    Ok((StatusCode::CREATED, Json(participant)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/series/{series_id}/participants/{participant_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("participant_id" = Uuid, Path, description = "Participant id")
    ),
    request_body = UpdateParticipantRequest,
    responses(
        (status = 200, description = "Participant updated", body = Participant),
        (status = 400, description = "Validation error, or a boat type given for an angler"),
        (status = 404, description = "Participant not found in this series")
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(db): State<Database>,
    Path((series_id, participant_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_clears()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let current = services::get_participant(db.pool(), series_id, participant_id).await?;
    req.validate_kind(current.participant_type)
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let updated = services::update_participant(db.pool(), series_id, participant_id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/series/{series_id}/participants/{participant_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("participant_id" = Uuid, Path, description = "Participant id")
    ),
    responses(
        (status = 204, description = "Participant and their point entries deleted"),
        (status = 404, description = "Participant not found in this series")
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(db): State<Database>,
    Path((series_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_participant(db.pool(), series_id, participant_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
