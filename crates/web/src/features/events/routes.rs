use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_event, delete_event, get_event, list_events, update_event};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:series_id/events", get(list_events).post(create_event))
        .route(
            "/:series_id/events/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
}
