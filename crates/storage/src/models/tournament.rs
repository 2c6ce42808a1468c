use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub event_date: chrono::NaiveDate,
    pub event_time: Option<String>,
    pub end_date: Option<chrono::NaiveDate>,
    pub state: String,
    pub location: String,
    pub species: Option<String>,
    pub entry_fee: Option<String>,
    pub rules_summary: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_website: Option<String>,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub max_participants: Option<i32>,
    pub prize_info: Option<String>,
    pub source: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
