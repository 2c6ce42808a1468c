use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Fishing club, association or other group kept in the directory
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Organization {
    pub organization_id: Uuid,
    pub name: String,
    pub org_type: Option<String>,
    pub focus_area: Option<String>,
    pub state_region: Option<String>,
    pub website: Option<String>,
    pub contact: Option<String>,
    pub membership: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
