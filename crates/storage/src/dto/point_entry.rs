use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::validate_non_negative;

/// Writes points for one (event, participant, category) key, replacing any
/// existing entry for that key.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertPointEntryRequest {
    pub event_id: Uuid,
    pub participant_id: Uuid,
    pub category_id: Uuid,

    #[validate(custom(function = "validate_non_negative"))]
    pub points: Decimal,

    #[validate(length(max = 1000))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EventPointEntry {
    pub participant_id: Uuid,
    pub category_id: Uuid,

    #[validate(custom(function = "validate_non_negative"))]
    pub points: Decimal,

    #[validate(length(max = 1000))]
    pub note: Option<String>,
}

/// Results for a whole event, written in one transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkPointEntryRequest {
    #[validate(length(min = 1, message = "At least one entry is required"))]
    #[validate(nested)]
    pub entries: Vec<EventPointEntry>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PointEntryFilter {
    pub event_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub participant_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(points: i64) -> EventPointEntry {
        EventPointEntry {
            participant_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            points: Decimal::from(points),
            note: None,
        }
    }

    #[test]
    fn test_negative_points_rejected() {
        let req = UpsertPointEntryRequest {
            event_id: Uuid::new_v4(),
            participant_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            points: Decimal::from(-1),
            note: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bulk_validates_each_entry() {
        let ok = BulkPointEntryRequest {
            entries: vec![entry(10), entry(0)],
        };
        assert!(ok.validate().is_ok());

        let bad = BulkPointEntryRequest {
            entries: vec![entry(10), entry(-3)],
        };
        assert!(bad.validate().is_err());

        let empty = BulkPointEntryRequest { entries: vec![] };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_points_accept_json_numbers() {
        let json = format!(
            r#"{{"event_id":"{}","participant_id":"{}","category_id":"{}","points":12.5}}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let req: UpsertPointEntryRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.points, Decimal::new(125, 1));
    }
}
