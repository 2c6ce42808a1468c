use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Shown when a participant has neither a boat name nor an angler name.
pub const UNNAMED_PARTICIPANT: &str = "Unnamed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum ParticipantType {
    Boat,
    Angler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum BoatType {
    Private,
    Charter,
}

/// A boat or angler competing in a series.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub series_id: Uuid,
    pub participant_type: ParticipantType,
    pub boat_type: Option<BoatType>,
    pub boat_name: Option<String>,
    pub angler_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Participant {
    /// Boat name if present, else angler name, else [`UNNAMED_PARTICIPANT`].
    pub fn display_name(&self) -> &str {
        non_empty(self.boat_name.as_deref())
            .or_else(|| non_empty(self.angler_name.as_deref()))
            .unwrap_or(UNNAMED_PARTICIPANT)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(boat_name: Option<&str>, angler_name: Option<&str>) -> Participant {
        Participant {
            participant_id: Uuid::new_v4(),
            series_id: Uuid::new_v4(),
            participant_type: ParticipantType::Boat,
            boat_type: Some(BoatType::Private),
            boat_name: boat_name.map(String::from),
            angler_name: angler_name.map(String::from),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_display_name_prefers_boat_name() {
        let p = participant(Some("Reel Deal"), Some("Jane Doe"));
        assert_eq!(p.display_name(), "Reel Deal");
    }

    #[test]
    fn test_display_name_falls_back_to_angler() {
        assert_eq!(participant(None, Some("Jane Doe")).display_name(), "Jane Doe");
        assert_eq!(participant(Some("  "), Some("Jane Doe")).display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_placeholder() {
        assert_eq!(participant(None, None).display_name(), UNNAMED_PARTICIPANT);
        assert_eq!(participant(Some(""), Some("")).display_name(), UNNAMED_PARTICIPANT);
    }

    #[test]
    fn test_types_use_lowercase_names() {
        assert_eq!(
            serde_json::from_str::<ParticipantType>(r#""boat""#).unwrap(),
            ParticipantType::Boat
        );
        assert_eq!(
            serde_json::to_string(&BoatType::Charter).unwrap(),
            r#""charter""#
        );
        assert!(serde_json::from_str::<ParticipantType>(r#""kayak""#).is_err());
        assert!(serde_json::from_str::<BoatType>(r#""Charter""#).is_err());
    }
}
