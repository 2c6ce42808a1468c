pub mod standings;

pub use standings::compute_standings;
