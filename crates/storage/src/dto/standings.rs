use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{BoatType, Participant, ParticipantType, Series, SeriesEvent};

/// Participant subset a leaderboard is computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantGroup {
    #[default]
    All,
    Boat,
    Angler,
    Private,
    Charter,
}

impl ParticipantGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Boat => "boat",
            Self::Angler => "angler",
            Self::Private => "private",
            Self::Charter => "charter",
        }
    }

    /// `private` and `charter` only ever match boats.
    pub fn matches(&self, participant: &Participant) -> bool {
        let is_boat = participant.participant_type == ParticipantType::Boat;
        match self {
            Self::All => true,
            Self::Boat => is_boat,
            Self::Angler => participant.participant_type == ParticipantType::Angler,
            Self::Private => is_boat && participant.boat_type == Some(BoatType::Private),
            Self::Charter => is_boat && participant.boat_type == Some(BoatType::Charter),
        }
    }

    /// Keeps the participants in this group, preserving their order.
    pub fn select(&self, mut participants: Vec<Participant>) -> Vec<Participant> {
        participants.retain(|participant| self.matches(participant));
        participants
    }
}

impl FromStr for ParticipantGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "boat" => Ok(Self::Boat),
            "angler" => Ok(Self::Angler),
            "private" => Ok(Self::Private),
            "charter" => Ok(Self::Charter),
            other => Err(format!(
                "group must be one of 'all', 'boat', 'angler', 'private', 'charter' (got '{other}')"
            )),
        }
    }
}

fn parse_group(group: Option<&str>) -> Result<ParticipantGroup, String> {
    match group {
        None | Some("") => Ok(ParticipantGroup::All),
        Some(value) => value.parse(),
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StandingsFilter {
    /// One of `all`, `boat`, `angler`, `private`, `charter`. Defaults to `all`.
    pub group: Option<String>,
    /// Restrict scoring to a single category. All categories are summed when absent.
    pub category_id: Option<Uuid>,
}

impl StandingsFilter {
    pub fn validate(&self) -> Result<ParticipantGroup, String> {
        parse_group(self.group.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ParticipantFilter {
    /// One of `all`, `boat`, `angler`, `private`, `charter`. Defaults to `all`.
    pub group: Option<String>,
}

impl ParticipantFilter {
    pub fn validate(&self) -> Result<ParticipantGroup, String> {
        parse_group(self.group.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct EventScore {
    pub points: Decimal,
    pub counted: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandingEntry {
    pub rank: u32,
    pub participant: Participant,
    pub display_name: String,
    pub best_of_score: Decimal,
    pub aggregate: Decimal,
    pub events_fished: u32,
    /// Events that contributed to `best_of_score`, highest total first.
    pub counted_event_ids: Vec<Uuid>,
    /// Breakdown for every event of the series, keyed by event id.
    pub per_event: BTreeMap<Uuid, EventScore>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandingsResult {
    pub series: Series,
    pub events: Vec<SeriesEvent>,
    pub standings: Vec<StandingEntry>,
    /// Number of events counted per participant; `null` when every event counts.
    pub best_of: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(participant_type: ParticipantType, boat_type: Option<BoatType>) -> Participant {
        Participant {
            participant_id: Uuid::new_v4(),
            series_id: Uuid::new_v4(),
            participant_type,
            boat_type,
            boat_name: None,
            angler_name: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_group_matches() {
        let charter = participant(ParticipantType::Boat, Some(BoatType::Charter));
        let private = participant(ParticipantType::Boat, Some(BoatType::Private));
        let untyped_boat = participant(ParticipantType::Boat, None);
        let angler = participant(ParticipantType::Angler, None);

        assert!(ParticipantGroup::All.matches(&angler));
        assert!(ParticipantGroup::Boat.matches(&untyped_boat));
        assert!(!ParticipantGroup::Boat.matches(&angler));
        assert!(ParticipantGroup::Angler.matches(&angler));
        assert!(ParticipantGroup::Charter.matches(&charter));
        assert!(!ParticipantGroup::Charter.matches(&private));
        assert!(!ParticipantGroup::Charter.matches(&untyped_boat));
        assert!(ParticipantGroup::Private.matches(&private));
    }

    #[test]
    fn test_charter_group_ignores_angler_with_charter_boat_type() {
        let odd = participant(ParticipantType::Angler, Some(BoatType::Charter));
        assert!(!ParticipantGroup::Charter.matches(&odd));
    }

    #[test]
    fn test_filter_validation() {
        assert_eq!(StandingsFilter::default().validate(), Ok(ParticipantGroup::All));

        let filter = StandingsFilter {
            group: Some("charter".to_string()),
            category_id: None,
        };
        assert_eq!(filter.validate(), Ok(ParticipantGroup::Charter));

        let filter = ParticipantFilter {
            group: Some("kayak".to_string()),
        };
        assert!(filter.validate().is_err());
    }
}
