//! Repository port for series storage
//! This is an interface - implementations are in infrastructure layer

use crate::domain::{DomainError, Series, SeriesFields, SeriesId, Vote};
use async_trait::async_trait;

/// Repository port for series persistence
///
/// Every by-id operation returns `DomainError::SeriesNotFound` when no record matches.
#[async_trait]
pub trait SeriesRepository: Send + Sync {
    /// Store a new series and assign its identifier
    async fn create(&self, fields: SeriesFields) -> Result<Series, DomainError>;

    /// List all series in insertion order
    async fn list(&self) -> Result<Vec<Series>, DomainError>;

    /// Find a series by ID
    async fn find_by_id(&self, id: SeriesId) -> Result<Series, DomainError>;

    /// Replace every mutable field of a series
    async fn update(&self, id: SeriesId, fields: SeriesFields) -> Result<Series, DomainError>;

    /// Delete a series; its identifier is never handed out again
    async fn delete(&self, id: SeriesId) -> Result<(), DomainError>;

    /// Move the ranking one step in the direction of the vote
    async fn adjust_ranking(&self, id: SeriesId, vote: Vote) -> Result<Series, DomainError>;

    /// Advance the last watched episode by one
    async fn increment_episode(&self, id: SeriesId) -> Result<Series, DomainError>;

    async fn set_status(&self, id: SeriesId, status: String) -> Result<Series, DomainError>;
}
