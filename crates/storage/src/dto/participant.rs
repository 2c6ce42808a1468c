use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::check_clear;
use crate::models::{BoatType, ParticipantType};

/// Request payload for registering a boat or angler in a series
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    pub participant_type: ParticipantType,

    /// Only meaningful for boats.
    pub boat_type: Option<BoatType>,

    #[validate(length(max = 255))]
    pub boat_name: Option<String>,

    #[validate(length(max = 255))]
    pub angler_name: Option<String>,
}

/// Partial update. Absent fields keep their value; switching to `angler`
/// drops the boat type.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateParticipantRequest {
    pub participant_type: Option<ParticipantType>,

    pub boat_type: Option<BoatType>,

    #[serde(default)]
    pub clear_boat_type: bool,

    #[validate(length(max = 255))]
    pub boat_name: Option<String>,

    #[serde(default)]
    pub clear_boat_name: bool,

    #[validate(length(max = 255))]
    pub angler_name: Option<String>,

    #[serde(default)]
    pub clear_angler_name: bool,
}

/// Anglers carry no boat type.
pub fn validate_participant_kind(
    participant_type: ParticipantType,
    boat_type: Option<BoatType>,
) -> Result<(), &'static str> {
    if participant_type == ParticipantType::Angler && boat_type.is_some() {
        return Err("boat_type is only valid for boat participants");
    }
    Ok(())
}

impl CreateParticipantRequest {
    pub fn validate_kind(&self) -> Result<(), &'static str> {
        validate_participant_kind(self.participant_type, self.boat_type)
    }
}

impl UpdateParticipantRequest {
    /// Checks the kind the participant ends up with, given its `current` type.
    pub fn validate_kind(&self, current: ParticipantType) -> Result<(), &'static str> {
        validate_participant_kind(self.participant_type.unwrap_or(current), self.boat_type)
    }

    pub fn validate_clears(&self) -> Result<(), &'static str> {
        check_clear(
            &self.boat_type,
            self.clear_boat_type,
            "boat_type cannot be set together with clear_boat_type",
        )?;
        check_clear(
            &self.boat_name,
            self.clear_boat_name,
            "boat_name cannot be set together with clear_boat_name",
        )?;
        check_clear(
            &self.angler_name,
            self.clear_angler_name,
            "angler_name cannot be set together with clear_angler_name",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angler_with_boat_type_rejected() {
        let req = CreateParticipantRequest {
            participant_type: ParticipantType::Angler,
            boat_type: Some(BoatType::Charter),
            boat_name: None,
            angler_name: Some("Jane Doe".to_string()),
        };
        assert!(req.validate_kind().is_err());
    }

    #[test]
    fn test_boat_with_boat_type_accepted() {
        let req = CreateParticipantRequest {
            participant_type: ParticipantType::Boat,
            boat_type: Some(BoatType::Charter),
            boat_name: Some("Sea Hunter".to_string()),
            angler_name: None,
        };
        assert!(req.validate_kind().is_ok());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_boat_type_on_existing_angler_rejected() {
        let req: UpdateParticipantRequest =
            serde_json::from_str(r#"{"boat_type": "charter"}"#).unwrap();
        assert!(req.validate_kind(ParticipantType::Angler).is_err());
        assert!(req.validate_kind(ParticipantType::Boat).is_ok());
    }

    #[test]
    fn test_update_switch_to_boat_with_boat_type_accepted() {
        let req: UpdateParticipantRequest =
            serde_json::from_str(r#"{"participant_type": "boat", "boat_type": "private"}"#)
                .unwrap();
        assert!(req.validate_kind(ParticipantType::Angler).is_ok());
    }

    #[test]
    fn test_update_clear_conflicts() {
        let req: UpdateParticipantRequest =
            serde_json::from_str(r#"{"boat_name": "Sea Hunter", "clear_boat_name": true}"#)
                .unwrap();
        assert!(req.validate_clears().is_err());

        let req: UpdateParticipantRequest =
            serde_json::from_str(r#"{"clear_angler_name": true}"#).unwrap();
        assert!(req.validate_clears().is_ok());
    }

    #[test]
    fn test_unknown_participant_type_fails_to_deserialize() {
        let json = r#"{"participant_type": "kayak"}"#;
        assert!(serde_json::from_str::<CreateParticipantRequest>(json).is_err());
    }
}
