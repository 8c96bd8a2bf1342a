pub mod series_id;
pub mod vote;

pub use series_id::SeriesId;
pub use vote::Vote;
