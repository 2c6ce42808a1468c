use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    models::SeriesCategory,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path};

use super::services;

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/categories",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    responses(
        (status = 200, description = "Categories in display order", body = Vec<SeriesCategory>),
        (status = 404, description = "Series not found")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
) -> Result<Json<Vec<SeriesCategory>>, WebError> {
    let categories = services::list_categories(db.pool(), series_id).await?;

    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/categories/{category_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("category_id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = SeriesCategory),
        (status = 404, description = "Category not found in this series")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path((series_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SeriesCategory>, WebError> {
    let category = services::get_category(db.pool(), series_id, category_id).await?;

    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/api/series/{series_id}/categories",
    params(
        ("series_id" = Uuid, Path, description = "Series id")
    ),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = SeriesCategory),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Series not found")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), series_id, &req).await?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/series/{series_id}/categories/{category_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("category_id" = Uuid, Path, description = "Category id")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated successfully", body = SeriesCategory),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found in this series")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(db): State<Database>,
    Path((series_id, category_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_clears()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let updated = services::update_category(db.pool(), series_id, category_id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/series/{series_id}/categories/{category_id}",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        ("category_id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 204, description = "Category and its point entries deleted"),
        (status = 404, description = "Category not found in this series")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(db): State<Database>,
    Path((series_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_category(db.pool(), series_id, category_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
