use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::series::{CreateSeriesRequest, UpdateSeriesRequest},
    models::Series,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path};

use super::services;

#[utoipa::path(
    get,
    path = "/api/series",
    responses(
        (status = 200, description = "List all series", body = Vec<Series>)
    ),
    tag = "series"
)]
pub async fn list_series(State(db): State<Database>) -> Result<Json<Vec<Series>>, WebError> {
    let series = services::list_series(db.pool()).await?;

    Ok(Json(series))
}

#[utoipa::path(
    get,
    path = "/api/series/{series_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    responses(
        (status = 200, description = "Series found", body = Series),
        (status = 404, description = "Series not found")
    ),
    tag = "series"
)]
pub async fn get_series(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let series = services::get_series(db.pool(), series_id).await?;

    Ok(Json(series).into_response())
}

#[utoipa::path(
    post,
    path = "/api/series",
    request_body = CreateSeriesRequest,
    responses(
        (status = 201, description = "Series created successfully", body = Series),
        (status = 400, description = "Validation error")
    ),
    tag = "series"
)]
pub async fn create_series(
    State(db): State<Database>,
    Json(req): Json<CreateSeriesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let series = services::create_series(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(series)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/series/{series_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    request_body = UpdateSeriesRequest,
    responses(
        (status = 200, description = "Series updated successfully", body = Series),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Series not found")
    ),
    tag = "series"
)]
pub async fn update_series(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Json(req): Json<UpdateSeriesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_clears()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let updated = services::update_series(db.pool(), series_id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/series/{series_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    responses(
        (status = 204, description = "Series and all of its events, categories, participants and points deleted"),
        (status = 404, description = "Series not found")
    ),
    tag = "series"
)]
pub async fn delete_series(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_series(db.pool(), series_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
