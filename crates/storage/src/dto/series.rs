use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::{check_clear, validate_non_negative};

/// Request payload for creating a series
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSeriesRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub description: Option<String>,

    /// Number of best events counted per participant. Omit to count every event.
    #[validate(range(min = 1, message = "best_of must be at least 1"))]
    pub best_of: Option<i32>,

    #[validate(custom(function = "validate_non_negative"))]
    pub participation_points: Option<Decimal>,

    #[validate(range(min = 0))]
    pub total_events: Option<i32>,
}

/// Request payload for updating a series. Absent fields keep their value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSeriesRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub clear_description: bool,

    #[validate(range(min = 1, message = "best_of must be at least 1"))]
    pub best_of: Option<i32>,

    /// Switch the series back to counting every event.
    #[serde(default)]
    pub count_all_events: bool,

    #[validate(custom(function = "validate_non_negative"))]
    pub participation_points: Option<Decimal>,

    #[validate(range(min = 0))]
    pub total_events: Option<i32>,

    #[serde(default)]
    pub clear_total_events: bool,
}

impl UpdateSeriesRequest {
    pub fn validate_clears(&self) -> Result<(), &'static str> {
        check_clear(
            &self.best_of,
            self.count_all_events,
            "best_of cannot be set together with count_all_events",
        )?;
        check_clear(
            &self.description,
            self.clear_description,
            "description cannot be set together with clear_description",
        )?;
        check_clear(
            &self.total_events,
            self.clear_total_events,
            "total_events cannot be set together with clear_total_events",
        )
    }
}
