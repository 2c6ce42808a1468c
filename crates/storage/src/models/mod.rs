pub mod category;
pub mod organization;
pub mod participant;
pub mod point_entry;
pub mod series;
pub mod series_event;
pub mod tournament;

pub use category::SeriesCategory;
pub use organization::Organization;
pub use participant::{BoatType, Participant, ParticipantType, UNNAMED_PARTICIPANT};
pub use point_entry::PointEntry;
pub use series::{BestOf, Series};
pub use series_event::SeriesEvent;
pub use tournament::Tournament;
