use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_series, delete_series, get_series, list_series, update_series};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_series).post(create_series))
        .route(
            "/:series_id",
            get(get_series).put(update_series).delete(delete_series),
        )
}
