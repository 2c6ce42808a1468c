pub mod categories;
pub mod events;
pub mod organizations;
pub mod participants;
pub mod points;
pub mod series;
pub mod standings;
pub mod tournaments;

use axum::Router;
use storage::Database;

use crate::error::WebError;

/// All API routes. Everything under a series shares the `/api/series` prefix.
pub fn router() -> Router<Database> {
    let series_routes = Router::new()
        .merge(series::routes::routes())
        .merge(events::routes::routes())
        .merge(categories::routes::routes())
        .merge(participants::routes::routes())
        .merge(points::routes::routes())
        .merge(standings::routes::routes());

    Router::new()
        .nest("/api/series", series_routes)
        .nest("/api/tournaments", tournaments::routes::routes())
        .nest("/api/organizations", organizations::routes::routes())
        .merge(organizations::routes::report_routes())
        .fallback(|| async { WebError::NotFound })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    // The pool never connects: every request below is rejected before
    // touching the database.
    fn app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        router().with_state(Database::from_pool(pool))
    }

    async fn send(uri: &str) -> (StatusCode, serde_json::Value) {
        send_request(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn send_json(method: &str, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send_request(request).await
    }

    async fn send_request(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send("/api/boats").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_standings_rejects_unknown_group() {
        let uri = format!("/api/series/{}/standings?group=kayak", Uuid::new_v4());
        let (status, body) = send(&uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("kayak"));
    }

    #[tokio::test]
    async fn test_participants_reject_unknown_group() {
        let uri = format!("/api/series/{}/participants?group=Charter", Uuid::new_v4());
        let (status, _) = send(&uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tournaments_reject_bad_pagination() {
        let (status, _) = send("/api/tournaments?page=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send("/api/tournaments?date_from=2026-05-01&date_to=2026-04-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "date_to must be on or after date_from");
    }

    #[tokio::test]
    async fn test_malformed_path_id_is_json_400() {
        let (status, body) = send("/api/series/not-a-uuid/standings").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_category_filter_is_json_400() {
        let uri = format!("/api/series/{}/standings?category_id=bogus", Uuid::new_v4());
        let (status, body) = send(&uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_json_400() {
        let uri = format!(
            "/api/series/{}/participants/{}",
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let (status, body) = send_json("PUT", &uri, r#"{"participant_type": "kayak"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_update_rejects_value_with_clear_flag() {
        let uri = format!("/api/series/{}/events/{}", Uuid::new_v4(), Uuid::new_v4());
        let (status, body) = send_json("PUT", &uri, r#"{"name": "Opener", "clear_name": true}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name cannot be set together with clear_name");
    }

    #[tokio::test]
    async fn test_organizations_reject_bad_limit() {
        let (status, body) = send("/api/organizations?limit=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "limit must be between 1 and 500");

        let (status, body) = send("/api/organizations?offset=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_organization_create_validates_name() {
        let (status, body) = send_json("POST", "/api/organizations", r#"{"name": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
    }
}
