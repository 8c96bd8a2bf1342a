//! In-Memory Series Repository
//! Thread-safe implementation of SeriesRepository port

use crate::domain::{ports::SeriesRepository, DomainError, Series, SeriesFields, SeriesId, Vote};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Records in insertion order plus the next identifier to hand out
struct SeriesTable {
    rows: Vec<Series>,
    next_id: SeriesId,
}

impl SeriesTable {
    fn position(&self, id: SeriesId) -> Result<usize, DomainError> {
        self.rows
            .iter()
            .position(|series| series.id() == id)
            .ok_or(DomainError::SeriesNotFound(id))
    }
}

/// Thread-safe in-memory series repository
///
/// A single mutex guards both the record list and the id counter, so reads and
/// writes are fully serialized. Lookups are linear scans, which is fine at
/// watch-list scale. Nothing survives a restart.
#[derive(Clone)]
pub struct InMemorySeriesRepository {
    table: Arc<Mutex<SeriesTable>>,
}

impl InMemorySeriesRepository {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(SeriesTable {
                rows: Vec::new(),
                next_id: SeriesId::new(1),
            })),
        }
    }

    // Every mutation completes before anything that could panic, so a poisoned
    // lock still guards a consistent table.
    fn lock(&self) -> MutexGuard<'_, SeriesTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` to the matching record under the lock and return a copy of the result
    fn modify<F>(&self, id: SeriesId, change: F) -> Result<Series, DomainError>
    where
        F: FnOnce(&mut Series),
    {
        let mut table = self.lock();
        let index = table.position(id)?;
        let series = &mut table.rows[index];
        change(series);
        Ok(series.clone())
    }
}

impl Default for InMemorySeriesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeriesRepository for InMemorySeriesRepository {
    async fn create(&self, fields: SeriesFields) -> Result<Series, DomainError> {
        let series = {
            let mut table = self.lock();
            let id = table.next_id;
            table.next_id = id.next();

            let series = Series::new(id, fields);
            table.rows.push(series.clone());
            series
        };

        info!(
            series_id = %series.id(),
            title = %series.title(),
            "Series stored in memory"
        );

        Ok(series)
    }

    async fn list(&self) -> Result<Vec<Series>, DomainError> {
        let rows = self.lock().rows.clone();
        debug!(count = rows.len(), "Listed series from memory");
        Ok(rows)
    }

    async fn find_by_id(&self, id: SeriesId) -> Result<Series, DomainError> {
        let table = self.lock();
        let index = table.position(id)?;
        Ok(table.rows[index].clone())
    }

    async fn update(&self, id: SeriesId, fields: SeriesFields) -> Result<Series, DomainError> {
        self.modify(id, |series| series.replace_fields(fields))
    }

    async fn delete(&self, id: SeriesId) -> Result<(), DomainError> {
        let remaining = {
            let mut table = self.lock();
            let index = table.position(id)?;
            table.rows.remove(index);
            table.rows.len()
        };

        info!(
            series_id = %id,
            remaining_series = remaining,
            "Series removed from memory"
        );

        Ok(())
    }

    async fn adjust_ranking(&self, id: SeriesId, vote: Vote) -> Result<Series, DomainError> {
        self.modify(id, |series| series.apply_vote(vote))
    }

    async fn increment_episode(&self, id: SeriesId) -> Result<Series, DomainError> {
        self.modify(id, Series::increment_episode)
    }

    async fn set_status(&self, id: SeriesId, status: String) -> Result<Series, DomainError> {
        self.modify(id, |series| series.set_status(status))
    }
}
