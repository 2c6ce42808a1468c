use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::point_entry::{BulkPointEntryRequest, PointEntryFilter, UpsertPointEntryRequest},
    models::PointEntry,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path, Query};

use super::services;

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/points",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        PointEntryFilter
    ),
    responses(
        (status = 200, description = "Point entries ordered by event number", body = Vec<PointEntry>),
        (status = 404, description = "Series not found")
    ),
    tag = "points"
)]
pub async fn list_points(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Query(filter): Query<PointEntryFilter>,
) -> Result<Json<Vec<PointEntry>>, WebError> {
    let entries = services::list_points(db.pool(), series_id, &filter).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    put,
    path = "/api/series/{series_id}/points",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    request_body = UpsertPointEntryRequest,
    responses(
        (status = 200, description = "Point entry created or replaced", body = PointEntry),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event, participant or category not found in this series")
    ),
    tag = "points"
)]
pub async fn upsert_points(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Json(req): Json<UpsertPointEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::upsert_points(db.pool(), series_id, &req).await?;

    Ok(Json(entry).into_response())
}

#[utoipa::path(
    put,
    path = "/api/series/{series_id}/events/{event_id}/points",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    request_body = BulkPointEntryRequest,
    responses(
        (status = 200, description = "All entries created or replaced", body = Vec<PointEntry>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event, a participant or a category not found in this series; nothing was written")
    ),
    tag = "points"
)]
pub async fn upsert_event_points(
    State(db): State<Database>,
    Path((series_id, event_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<BulkPointEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entries = services::upsert_event_points(db.pool(), series_id, event_id, &req).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/series/{series_id}/points/{entry_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("entry_id" = Uuid, Path, description = "Point entry id")
    ),
    responses(
        (status = 204, description = "Point entry deleted"),
        (status = 404, description = "Point entry not found in this series")
    ),
    tag = "points"
)]
pub async fn delete_points(
    State(db): State<Database>,
    Path((series_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_points(db.pool(), series_id, entry_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
