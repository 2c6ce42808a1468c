use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{CreateEventRequest, UpdateEventRequest},
    models::SeriesEvent,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path};

use super::services;

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/events",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    responses(
        (status = 200, description = "Events ordered by event number", body = Vec<SeriesEvent>),
        (status = 404, description = "Series not found")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
) -> Result<Json<Vec<SeriesEvent>>, WebError> {
    let events = services::list_events(db.pool(), series_id).await?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/events/{event_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = SeriesEvent),
        (status = 404, description = "Event not found in this series")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path((series_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), series_id, event_id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/series/{series_id}/events",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = SeriesEvent),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Series not found"),
        (status = 409, description = "Event number already used or tournament unknown")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), series_id, &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/series/{series_id}/events/{event_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = SeriesEvent),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found in this series"),
        (status = 409, description = "Event number already used or tournament unknown")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path((series_id, event_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_clears()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let updated = services::update_event(db.pool(), series_id, event_id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/series/{series_id}/events/{event_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 204, description = "Event and its point entries deleted"),
        (status = 404, description = "Event not found in this series")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path((series_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_event(db.pool(), series_id, event_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
