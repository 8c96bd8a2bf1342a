pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Series, SeriesFields};
pub use error::DomainError;
pub use value_objects::{SeriesId, Vote};
