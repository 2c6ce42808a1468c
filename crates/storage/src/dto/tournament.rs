use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::PaginationParams;

/// Payload for creating a tournament, also used as the full replacement on update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TournamentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub event_date: NaiveDate,

    #[validate(length(max = 50))]
    pub event_time: Option<String>,

    pub end_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 64, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    #[validate(length(max = 255))]
    pub species: Option<String>,
    pub entry_fee: Option<String>,
    pub rules_summary: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,

    #[validate(email)]
    pub contact_email: Option<String>,

    #[validate(url)]
    pub contact_website: Option<String>,

    pub organizer: Option<String>,
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub max_participants: Option<i32>,

    pub prize_info: Option<String>,
    pub source: Option<String>,
}

impl TournamentRequest {
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if let Some(end) = self.end_date
            && end < self.event_date
        {
            return Err("End date must be on or after event date");
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TournamentFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Exact state match, e.g. `NC`.
    pub state: Option<String>,
    /// Case-insensitive substring match on species.
    pub species: Option<String>,
    /// Case-insensitive substring match on name, description, organizer or location.
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TournamentFilter {
    pub fn pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();
        PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            page_size: self.page_size.unwrap_or(defaults.page_size),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()?;

        if let (Some(from), Some(to)) = (self.date_from, self.date_to)
            && to < from
        {
            return Err("date_to must be on or after date_from".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StateCount {
    pub state: String,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SpeciesCount {
    pub species: String,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TournamentStats {
    pub total_tournaments: i64,
    pub upcoming: i64,
    pub by_state: Vec<StateCount>,
    pub by_species: Vec<SpeciesCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TournamentRequest {
        TournamentRequest {
            name: "Cape Fear Redfish Classic".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            event_time: Some("6:00 AM".to_string()),
            end_date: None,
            state: "NC".to_string(),
            location: "Wrightsville Beach, NC".to_string(),
            species: Some("Redfish".to_string()),
            entry_fee: None,
            rules_summary: None,
            contact_name: None,
            contact_phone: None,
            contact_email: Some("mike@capefearredfish.com".to_string()),
            contact_website: None,
            organizer: None,
            description: None,
            max_participants: Some(60),
            prize_info: None,
            source: None,
        }
    }

    #[test]
    fn test_valid_tournament() {
        let req = request();
        assert!(req.validate().is_ok());
        assert!(req.validate_dates().is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2026, 3, 13);
        assert!(req.validate_dates().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = request();
        req.contact_email = Some("not-an-email".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_filter_pagination_defaults() {
        let filter = TournamentFilter::default();
        assert_eq!(filter.pagination().page, 1);
        assert_eq!(filter.pagination().page_size, 100);

        let filter = TournamentFilter {
            page_size: Some(1000),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_filter_date_range() {
        let filter = TournamentFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 5, 1),
            date_to: NaiveDate::from_ymd_opt(2026, 4, 1),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }
}
