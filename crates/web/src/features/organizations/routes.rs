use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_organization, delete_organization, export_organizations, get_organization,
    get_organization_stats, list_organizations, update_organization,
};

/// Mounted under `/api/organizations`
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_organizations).post(create_organization))
        .route(
            "/:organization_id",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
}

/// Directory-wide reports, merged at the root
pub fn report_routes() -> Router<Database> {
    Router::new()
        .route("/api/stats", get(get_organization_stats))
        .route("/api/export", get(export_organizations))
}
