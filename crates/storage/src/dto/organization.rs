use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Organization;

pub const DEFAULT_ORGANIZATION_LIMIT: u32 = 100;
pub const MAX_ORGANIZATION_LIMIT: u32 = 500;

/// Payload for creating an organization, also used as the full replacement on update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrganizationRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 100))]
    pub org_type: Option<String>,
    pub focus_area: Option<String>,

    #[validate(length(max = 100))]
    pub state_region: Option<String>,

    #[validate(url)]
    pub website: Option<String>,

    pub contact: Option<String>,
    pub membership: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct OrganizationFilter {
    /// Case-insensitive substring match on the state or region.
    pub state: Option<String>,
    /// Case-insensitive substring match on the organization type.
    pub org_type: Option<String>,
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
    /// Maximum rows returned, 1 to 500. Defaults to 100.
    pub limit: Option<u32>,
    /// Rows skipped before the first one returned.
    pub offset: Option<u32>,
}

impl OrganizationFilter {
    pub fn limit(&self) -> i64 {
        i64::from(self.limit.unwrap_or(DEFAULT_ORGANIZATION_LIMIT))
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.offset.unwrap_or(0))
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit
            && !(1..=MAX_ORGANIZATION_LIMIT).contains(&limit)
        {
            return Err(format!(
                "limit must be between 1 and {MAX_ORGANIZATION_LIMIT}"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegionCount {
    /// `null` groups organizations without a state or region.
    pub state: Option<String>,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizationTypeCount {
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizationStats {
    pub total_organizations: i64,
    pub by_state: Vec<RegionCount>,
    pub by_type: Vec<OrganizationTypeCount>,
}

/// Full directory dump ordered by state or region, then name
#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizationExport {
    pub exported_at: DateTime<Utc>,
    pub total: usize,
    pub organizations: Vec<Organization>,
}

impl OrganizationExport {
    pub fn new(organizations: Vec<Organization>) -> Self {
        Self {
            exported_at: Utc::now(),
            total: organizations.len(),
            organizations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}
