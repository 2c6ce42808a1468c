use anyhow::Context;
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod extract;
mod features;

use config::Config;
use features::{
    categories, events, organizations, participants, points, series, standings, tournaments,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        series::handlers::list_series,
        series::handlers::get_series,
        series::handlers::create_series,
        series::handlers::update_series,
        series::handlers::delete_series,
        events::handlers::list_events,
        events::handlers::get_event,
        events::handlers::create_event,
        events::handlers::update_event,
        events::handlers::delete_event,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        categories::handlers::update_category,
        categories::handlers::delete_category,
        participants::handlers::list_participants,
        participants::handlers::get_participant,
        participants::handlers::create_participant,
        participants::handlers::update_participant,
        participants::handlers::delete_participant,
        points::handlers::list_points,
        points::handlers::upsert_points,
        points::handlers::upsert_event_points,
        points::handlers::delete_points,
        standings::handlers::get_standings,
        tournaments::handlers::list_tournaments,
        tournaments::handlers::get_stats,
        tournaments::handlers::get_tournament,
        tournaments::handlers::create_tournament,
        tournaments::handlers::update_tournament,
        tournaments::handlers::delete_tournament,
        organizations::handlers::list_organizations,
        organizations::handlers::get_organization,
        organizations::handlers::create_organization,
        organizations::handlers::update_organization,
        organizations::handlers::delete_organization,
        organizations::handlers::get_organization_stats,
        organizations::handlers::export_organizations,
    ),
    components(
        schemas(
            storage::dto::series::CreateSeriesRequest,
            storage::dto::series::UpdateSeriesRequest,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::participant::CreateParticipantRequest,
            storage::dto::participant::UpdateParticipantRequest,
            storage::dto::point_entry::UpsertPointEntryRequest,
            storage::dto::point_entry::EventPointEntry,
            storage::dto::point_entry::BulkPointEntryRequest,
            storage::dto::standings::ParticipantGroup,
            storage::dto::standings::EventScore,
            storage::dto::standings::StandingEntry,
            storage::dto::standings::StandingsResult,
            storage::dto::tournament::TournamentRequest,
            storage::dto::tournament::TournamentStats,
            storage::dto::tournament::StateCount,
            storage::dto::tournament::SpeciesCount,
            storage::dto::organization::OrganizationRequest,
            storage::dto::organization::OrganizationStats,
            storage::dto::organization::RegionCount,
            storage::dto::organization::OrganizationTypeCount,
            storage::dto::organization::OrganizationExport,
            storage::dto::organization::DeletedResponse,
            storage::dto::common::PaginationMeta,
            storage::models::Series,
            storage::models::SeriesEvent,
            storage::models::SeriesCategory,
            storage::models::Participant,
            storage::models::ParticipantType,
            storage::models::BoatType,
            storage::models::PointEntry,
            storage::models::Tournament,
            storage::models::Organization,
        )
    ),
    tags(
        (name = "series", description = "Tournament series and their scoring rules"),
        (name = "events", description = "Scheduled events of a series"),
        (name = "categories", description = "Scoring categories of a series"),
        (name = "participants", description = "Boats and anglers registered in a series"),
        (name = "points", description = "Points recorded per event, participant and category"),
        (name = "standings", description = "Computed series leaderboards"),
        (name = "tournaments", description = "Tournament calendar"),
        (name = "organizations", description = "Directory of fishing clubs and associations"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting series standings API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::with_max_connections(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!(
        max_connections = config.database_max_connections,
        "Database connection established"
    );

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let app = features::router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
