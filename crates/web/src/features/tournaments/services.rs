use sqlx::PgPool;
use storage::{
    dto::{
        common::PaginatedResponse,
        tournament::{TournamentFilter, TournamentRequest, TournamentStats},
    },
    error::Result,
    models::Tournament,
    repository::tournament::TournamentRepository,
};
use uuid::Uuid;

pub async fn list_tournaments(
    pool: &PgPool,
    filter: &TournamentFilter,
) -> Result<PaginatedResponse<Tournament>> {
    let repo = TournamentRepository::new(pool);
    let (tournaments, total) = repo.list(filter).await?;

    let pagination = filter.pagination();
    Ok(PaginatedResponse::new(
        tournaments,
        pagination.page,
        pagination.page_size,
        total,
    ))
}

pub async fn get_tournament(pool: &PgPool, tournament_id: Uuid) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(tournament_id).await
}

pub async fn create_tournament(pool: &PgPool, request: &TournamentRequest) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    let tournament = repo.create(request).await?;
    tracing::info!(tournament_id = %tournament.tournament_id, name = %tournament.name, "tournament created");
    Ok(tournament)
}

pub async fn update_tournament(
    pool: &PgPool,
    tournament_id: Uuid,
    request: &TournamentRequest,
) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.update(tournament_id, request).await
}

/// Series events linked to the tournament keep their results; only the link is cleared
pub async fn delete_tournament(pool: &PgPool, tournament_id: Uuid) -> Result<()> {
    let repo = TournamentRepository::new(pool);
    repo.delete(tournament_id).await?;
    tracing::info!(%tournament_id, "tournament deleted");
    Ok(())
}

pub async fn get_stats(pool: &PgPool) -> Result<TournamentStats> {
    let repo = TournamentRepository::new(pool);
    repo.stats().await
}
