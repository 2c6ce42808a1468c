use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Series {
    pub series_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub best_of: Option<i32>,
    pub participation_points: Decimal,
    pub total_events: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl Series {
    pub fn best_of_policy(&self) -> BestOf {
        BestOf::from_config(self.best_of)
    }
}

/// How many events per participant count toward the primary score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestOf {
    /// Every event counts.
    All,
    /// Only the `n` highest-scoring events count. Always at least 1.
    Top(usize),
}

impl BestOf {
    /// A missing or non-positive configured value means every event counts.
    pub fn from_config(best_of: Option<i32>) -> Self {
        match best_of {
            Some(n) if n >= 1 => Self::Top(n as usize),
            _ => Self::All,
        }
    }

    /// Number of selection slots when `event_count` events exist.
    pub fn slots(&self, event_count: usize) -> usize {
        match self {
            Self::All => event_count,
            Self::Top(n) => *n,
        }
    }

    /// The configured value, `None` for "all events count".
    pub fn as_option(&self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Top(n) => Some(*n as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_best_of_counts_all_events() {
        assert_eq!(BestOf::from_config(None), BestOf::All);
        assert_eq!(BestOf::All.slots(7), 7);
        assert_eq!(BestOf::All.as_option(), None);
    }

    #[test]
    fn test_non_positive_best_of_counts_all_events() {
        assert_eq!(BestOf::from_config(Some(0)), BestOf::All);
        assert_eq!(BestOf::from_config(Some(-2)), BestOf::All);
    }

    #[test]
    fn test_configured_best_of() {
        let best_of = BestOf::from_config(Some(3));
        assert_eq!(best_of, BestOf::Top(3));
        assert_eq!(best_of.slots(10), 3);
        assert_eq!(best_of.slots(1), 3);
        assert_eq!(best_of.as_option(), Some(3));
    }
}
