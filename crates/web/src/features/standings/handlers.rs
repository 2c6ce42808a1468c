use axum::extract::State;
use storage::{
    Database,
    dto::standings::{StandingsFilter, StandingsResult},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::extract::{Json, Path, Query};

use super::services;

#[utoipa::path(
    get,
    path = "/api/series/{series_id}/standings",
    params(
        ("series_id" = Uuid, Path, description = "Series id"),
        StandingsFilter
    ),
    responses(
        (status = 200, description = "Ranked standings for the requested group", body = StandingsResult),
        (status = 400, description = "Unknown group or malformed id"),
        (status = 404, description = "Series or category not found")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Path(series_id): Path<Uuid>,
    Query(filter): Query<StandingsFilter>,
) -> Result<Json<StandingsResult>, WebError> {
    let group = filter.validate().map_err(WebError::BadRequest)?;

    let result = services::get_standings(db.pool(), series_id, group, filter.category_id).await?;

    Ok(Json(result))
}
