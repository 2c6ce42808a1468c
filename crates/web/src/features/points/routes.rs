use axum::{
    Router,
    routing::{delete, get, put},
};
use storage::Database;

use super::handlers::{delete_points, list_points, upsert_event_points, upsert_points};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:series_id/points", get(list_points).put(upsert_points))
        .route("/:series_id/points/:entry_id", delete(delete_points))
        .route("/:series_id/events/:event_id/points", put(upsert_event_points))
}
