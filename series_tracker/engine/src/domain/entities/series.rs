//! Series Entity
//! Watch state of a single TV show

use crate::domain::{SeriesId, Vote};
use serde::{Deserialize, Serialize};

/// Caller-supplied part of a series: everything except the identifier
///
/// Missing JSON fields decode to their zero value and an `id` key, if present,
/// is ignored. No relation between the counters is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesFields {
    pub title: String,
    pub status: String,
    pub last_episode_watched: i64,
    pub total_episodes: i64,
    pub ranking: i64,
}

/// A tracked series as owned by a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    id: SeriesId,
    #[serde(flatten)]
    fields: SeriesFields,
}

impl Series {
    pub fn new(id: SeriesId, fields: SeriesFields) -> Self {
        Self { id, fields }
    }

    // ===== Accessors =====

    pub fn id(&self) -> SeriesId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn status(&self) -> &str {
        &self.fields.status
    }

    pub fn last_episode_watched(&self) -> i64 {
        self.fields.last_episode_watched
    }

    pub fn total_episodes(&self) -> i64 {
        self.fields.total_episodes
    }

    pub fn ranking(&self) -> i64 {
        self.fields.ranking
    }

    pub fn fields(&self) -> &SeriesFields {
        &self.fields
    }

    // ===== Mutations =====

    /// Replace every mutable field, keeping the identifier
    pub fn replace_fields(&mut self, fields: SeriesFields) {
        self.fields = fields;
    }

    pub fn set_status(&mut self, status: String) {
        self.fields.status = status;
    }

    pub fn increment_episode(&mut self) {
        self.fields.last_episode_watched = self.fields.last_episode_watched.saturating_add(1);
    }

    pub fn apply_vote(&mut self, vote: Vote) {
        self.fields.ranking = self.fields.ranking.saturating_add(vote.delta());
    }
}
