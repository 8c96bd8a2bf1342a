//! Domain-level errors

use crate::domain::SeriesId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Series '{0}' not found")]
    SeriesNotFound(SeriesId),

    /// Raised by stores backed by an external system; the in-memory store never produces it
    #[error("Storage failure: {0}")]
    Storage(String),
}
