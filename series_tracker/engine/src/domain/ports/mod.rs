pub mod series_repository;

pub use series_repository::SeriesRepository;
