use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Points scored by one participant in one category at one event.
///
/// `(event_id, participant_id, category_id)` is unique; writes to an existing
/// key replace `points` and `note`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PointEntry {
    pub entry_id: Uuid,
    pub series_id: Uuid,
    pub event_id: Uuid,
    pub participant_id: Uuid,
    pub category_id: Uuid,
    pub points: Decimal,
    pub note: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
