pub mod category;
pub mod common;
pub mod event;
pub mod organization;
pub mod participant;
pub mod point_entry;
pub mod series;
pub mod standings;
pub mod tournament;
