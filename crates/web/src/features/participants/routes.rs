use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_participant, delete_participant, get_participant, list_participants,
    update_participant,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/:series_id/participants",
            get(list_participants).post(create_participant),
        )
        .route(
            "/:series_id/participants/:participant_id",
            get(get_participant)
                .put(update_participant)
                .delete(delete_participant),
        )
}
