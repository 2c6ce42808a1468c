use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        tournament::{TournamentFilter, TournamentRequest, TournamentStats},
    },
    models::Tournament,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Path, Query};

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    params(TournamentFilter),
    responses(
        (status = 200, description = "Page of tournaments ordered by event date", body = PaginatedResponse<Tournament>),
        (status = 400, description = "Invalid pagination or date range")
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(
    State(db): State<Database>,
    Query(filter): Query<TournamentFilter>,
) -> Result<Json<PaginatedResponse<Tournament>>, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let page = services::list_tournaments(db.pool(), &filter).await?;

    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/tournaments/stats",
    responses(
        (status = 200, description = "Tournament counts overall, by state and by species", body = TournamentStats)
    ),
    tag = "tournaments"
)]
pub async fn get_stats(State(db): State<Database>) -> Result<Json<TournamentStats>, WebError> {
    let stats = services::get_stats(db.pool()).await?;

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Tournament found", body = Tournament),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<Tournament>, WebError> {
    let tournament = services::get_tournament(db.pool(), tournament_id).await?;

    Ok(Json(tournament))
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = TournamentRequest,
    responses(
        (status = 201, description = "Tournament created", body = Tournament),
        (status = 400, description = "Validation error")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Json(req): Json<TournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let tournament = services::create_tournament(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(tournament)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament id")
    ),
    request_body = TournamentRequest,
    responses(
        (status = 200, description = "Tournament replaced", body = Tournament),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<TournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let tournament = services::update_tournament(db.pool(), tournament_id, &req).await?;

    Ok(Json(tournament).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament id")
    ),
    responses(
        (status = 204, description = "Tournament deleted"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_tournament(db.pool(), tournament_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
