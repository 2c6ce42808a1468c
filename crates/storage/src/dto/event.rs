use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::check_clear;

/// Request payload for adding an event to a series
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(range(min = 1, message = "event_number must be at least 1"))]
    pub event_number: i32,

    pub event_date: NaiveDate,

    #[validate(length(max = 255))]
    pub name: Option<String>,

    /// Optional link to a standalone tournament record.
    pub tournament_id: Option<Uuid>,
}

/// Partial update. Absent fields keep their value; `clear_name` and
/// `unlink_tournament` null the optional ones.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(range(min = 1, message = "event_number must be at least 1"))]
    pub event_number: Option<i32>,

    pub event_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub name: Option<String>,

    #[serde(default)]
    pub clear_name: bool,

    pub tournament_id: Option<Uuid>,

    #[serde(default)]
    pub unlink_tournament: bool,
}

impl UpdateEventRequest {
    pub fn validate_clears(&self) -> Result<(), &'static str> {
        check_clear(
            &self.name,
            self.clear_name,
            "name cannot be set together with clear_name",
        )?;
        check_clear(
            &self.tournament_id,
            self.unlink_tournament,
            "tournament_id cannot be set together with unlink_tournament",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlink_tournament() {
        let req: UpdateEventRequest =
            serde_json::from_str(r#"{"unlink_tournament": true}"#).unwrap();
        assert!(req.unlink_tournament);
        assert!(req.tournament_id.is_none());
        assert!(req.validate_clears().is_ok());
    }

    #[test]
    fn test_link_and_unlink_conflict() {
        let json = format!(
            r#"{{"tournament_id": "{}", "unlink_tournament": true}}"#,
            Uuid::new_v4()
        );
        let req: UpdateEventRequest = serde_json::from_str(&json).unwrap();
        assert!(req.validate_clears().is_err());
    }

    #[test]
    fn test_event_number_must_be_positive() {
        let req: UpdateEventRequest = serde_json::from_str(r#"{"event_number": 0}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
