use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::check_clear;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub clear_description: bool,

    pub sort_order: Option<i32>,
}

impl UpdateCategoryRequest {
    pub fn validate_clears(&self) -> Result<(), &'static str> {
        check_clear(
            &self.description,
            self.clear_description,
            "description cannot be set together with clear_description",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_description() {
        let req: UpdateCategoryRequest =
            serde_json::from_str(r#"{"clear_description": true}"#).unwrap();
        assert!(req.clear_description);
        assert!(req.validate_clears().is_ok());

        let req: UpdateCategoryRequest =
            serde_json::from_str(r#"{"description": "Heaviest fish", "clear_description": true}"#)
                .unwrap();
        assert!(req.validate_clears().is_err());
    }

    #[test]
    fn test_omitted_fields_keep_values() {
        let req: UpdateCategoryRequest = serde_json::from_str(r#"{"sort_order": 2}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.description.is_none());
        assert!(!req.clear_description);
        assert!(req.validate().is_ok());
    }
}
