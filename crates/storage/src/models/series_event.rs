use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One scored event of a series, stored in `series_tournaments`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SeriesEvent {
    pub event_id: Uuid,
    pub series_id: Uuid,
    pub tournament_id: Option<Uuid>,
    pub event_number: i32,
    pub event_date: chrono::NaiveDate,
    pub name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
