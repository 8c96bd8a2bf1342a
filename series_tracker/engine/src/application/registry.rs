//! Application
//! Composition root handed to every driving adapter

use crate::domain::ports::SeriesRepository;
use crate::domain::{DomainError, Series, SeriesFields, SeriesId, Vote};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry point for every series operation
///
/// Built once at startup around a single store and shared by reference with
/// all request handlers, so tests can run against isolated instances.
pub struct Application {
    repository: Arc<dyn SeriesRepository>,
}

impl Application {
    /// Create the application on top of a store adapter
    pub fn new(repository: Arc<dyn SeriesRepository>) -> Self {
        Self { repository }
    }

    // ===== Commands (modify state) =====

    pub async fn create_series(&self, fields: SeriesFields) -> Result<Series, DomainError> {
        let series = self.repository.create(fields).await?;
        info!(series_id = %series.id(), title = %series.title(), "Series created");
        Ok(series)
    }

    pub async fn update_series(
        &self,
        id: SeriesId,
        fields: SeriesFields,
    ) -> Result<Series, DomainError> {
        let series = self
            .repository
            .update(id, fields)
            .await
            .inspect_err(|e| log_failure("update", id, e))?;
        info!(series_id = %id, "Series updated");
        Ok(series)
    }

    pub async fn delete_series(&self, id: SeriesId) -> Result<(), DomainError> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete", id, e))?;
        info!(series_id = %id, "Series deleted");
        Ok(())
    }

    pub async fn set_status(&self, id: SeriesId, status: String) -> Result<Series, DomainError> {
        let series = self
            .repository
            .set_status(id, status)
            .await
            .inspect_err(|e| log_failure("set status", id, e))?;
        info!(series_id = %id, status = %series.status(), "Series status changed");
        Ok(series)
    }

    pub async fn increment_episode(&self, id: SeriesId) -> Result<Series, DomainError> {
        let series = self
            .repository
            .increment_episode(id)
            .await
            .inspect_err(|e| log_failure("increment episode", id, e))?;
        info!(
            series_id = %id,
            last_episode_watched = series.last_episode_watched(),
            "Episode marked as watched"
        );
        Ok(series)
    }

    pub async fn vote(&self, id: SeriesId, vote: Vote) -> Result<Series, DomainError> {
        let series = self
            .repository
            .adjust_ranking(id, vote)
            .await
            .inspect_err(|e| log_failure("vote", id, e))?;
        info!(series_id = %id, vote = %vote, ranking = series.ranking(), "Series ranked");
        Ok(series)
    }

    // ===== Queries (read state) =====

    pub async fn list_series(&self) -> Result<Vec<Series>, DomainError> {
        self.repository.list().await
    }

    pub async fn get_series(&self, id: SeriesId) -> Result<Series, DomainError> {
        let series = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| log_failure("get", id, e))?;
        debug!(series_id = %id, "Series retrieved");
        Ok(series)
    }
}

// Storage failures are logged where they occur
fn log_failure(operation: &str, id: SeriesId, error: &DomainError) {
    if let DomainError::SeriesNotFound(_) = error {
        warn!(series_id = %id, operation, "Series not found");
    }
}
