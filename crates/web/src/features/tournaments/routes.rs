use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_tournament, delete_tournament, get_stats, get_tournament, list_tournaments,
    update_tournament,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_tournaments).post(create_tournament))
        .route("/stats", get(get_stats))
        .route(
            "/:tournament_id",
            get(get_tournament)
                .put(update_tournament)
                .delete(delete_tournament),
        )
}
