//! PostgreSQL Series Repository
//!
//! Thin adapter issuing parameterized statements against a `series` table.
//! Consistency and durability are left to the database; the adapter only
//! marshals parameters and maps "no row" to `SeriesNotFound`.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE series (
//!     id                   BIGSERIAL PRIMARY KEY,
//!     title                TEXT   NOT NULL,
//!     status               TEXT   NOT NULL,
//!     last_episode_watched BIGINT NOT NULL,
//!     total_episodes       BIGINT NOT NULL,
//!     ranking              BIGINT NOT NULL
//! );
//! ```
//!
//! Rows are decoded by column name, so every statement names its columns
//! instead of relying on `RETURNING *` order.

use crate::constants::database::{ACQUIRE_TIMEOUT_SEC, MAX_CONNECTIONS};
use crate::domain::{ports::SeriesRepository, DomainError, Series, SeriesFields, SeriesId, Vote};
use crate::infrastructure::DatabaseConfig;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, error, info};

const INSERT_SERIES: &str = "INSERT INTO series \
     (title, status, last_episode_watched, total_episodes, ranking) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, title, status, last_episode_watched, total_episodes, ranking";

const SELECT_ALL_SERIES: &str = "SELECT id, title, status, last_episode_watched, total_episodes, ranking \
     FROM series ORDER BY id";

const SELECT_SERIES: &str = "SELECT id, title, status, last_episode_watched, total_episodes, ranking \
     FROM series WHERE id = $1";

const UPDATE_SERIES: &str = "UPDATE series \
     SET title = $1, status = $2, last_episode_watched = $3, total_episodes = $4, ranking = $5 \
     WHERE id = $6 \
     RETURNING id, title, status, last_episode_watched, total_episodes, ranking";

const DELETE_SERIES: &str = "DELETE FROM series WHERE id = $1";

const ADJUST_RANKING: &str = "UPDATE series SET ranking = ranking + $1 WHERE id = $2 \
     RETURNING id, title, status, last_episode_watched, total_episodes, ranking";

const INCREMENT_EPISODE: &str =
    "UPDATE series SET last_episode_watched = last_episode_watched + 1 WHERE id = $1 \
     RETURNING id, title, status, last_episode_watched, total_episodes, ranking";

const SET_STATUS: &str = "UPDATE series SET status = $1 WHERE id = $2 \
     RETURNING id, title, status, last_episode_watched, total_episodes, ranking";

/// One row of the `series` table
#[derive(Debug, sqlx::FromRow)]
struct SeriesRow {
    id: i64,
    title: String,
    status: String,
    last_episode_watched: i64,
    total_episodes: i64,
    ranking: i64,
}

impl From<SeriesRow> for Series {
    fn from(row: SeriesRow) -> Self {
        Series::new(
            SeriesId::new(row.id),
            SeriesFields {
                title: row.title,
                status: row.status,
                last_episode_watched: row.last_episode_watched,
                total_episodes: row.total_episodes,
                ranking: row.ranking,
            },
        )
    }
}

/// Map a driver failure to a storage error, logging the cause
fn storage_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| {
        error!(operation, error = %err, "Database operation failed");
        DomainError::Storage(format!("{}: {}", operation, err))
    }
}

fn found(id: SeriesId, row: Option<SeriesRow>) -> Result<Series, DomainError> {
    row.map(Series::from).ok_or(DomainError::SeriesNotFound(id))
}

/// PostgreSQL implementation of the series repository
#[derive(Debug, Clone)]
pub struct PostgresSeriesRepository {
    pool: PgPool,
}

impl PostgresSeriesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool and verify the database answers
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        debug!(config = ?config, "Connecting to PostgreSQL");

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SEC))
            .connect_with(config.connect_options())
            .await?;

        let repository = Self::new(pool);
        repository.ping().await?;

        info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Connected to PostgreSQL"
        );

        Ok(repository)
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection; later queries fail
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}

#[async_trait]
impl SeriesRepository for PostgresSeriesRepository {
    async fn create(&self, fields: SeriesFields) -> Result<Series, DomainError> {
        let row = sqlx::query_as::<_, SeriesRow>(INSERT_SERIES)
            .bind(fields.title)
            .bind(fields.status)
            .bind(fields.last_episode_watched)
            .bind(fields.total_episodes)
            .bind(fields.ranking)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error("insert series"))?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Series>, DomainError> {
        let rows = sqlx::query_as::<_, SeriesRow>(SELECT_ALL_SERIES)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("select series"))?;

        debug!(count = rows.len(), "Listed series from database");
        Ok(rows.into_iter().map(Series::from).collect())
    }

    async fn find_by_id(&self, id: SeriesId) -> Result<Series, DomainError> {
        let row = sqlx::query_as::<_, SeriesRow>(SELECT_SERIES)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("select series by id"))?;

        found(id, row)
    }

    async fn update(&self, id: SeriesId, fields: SeriesFields) -> Result<Series, DomainError> {
        let row = sqlx::query_as::<_, SeriesRow>(UPDATE_SERIES)
            .bind(fields.title)
            .bind(fields.status)
            .bind(fields.last_episode_watched)
            .bind(fields.total_episodes)
            .bind(fields.ranking)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("update series"))?;

        found(id, row)
    }

    async fn delete(&self, id: SeriesId) -> Result<(), DomainError> {
        let result = sqlx::query(DELETE_SERIES)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error("delete series"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SeriesNotFound(id));
        }
        Ok(())
    }

    async fn adjust_ranking(&self, id: SeriesId, vote: Vote) -> Result<Series, DomainError> {
        let row = sqlx::query_as::<_, SeriesRow>(ADJUST_RANKING)
            .bind(vote.delta())
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("adjust ranking"))?;

        found(id, row)
    }

    async fn increment_episode(&self, id: SeriesId) -> Result<Series, DomainError> {
        let row = sqlx::query_as::<_, SeriesRow>(INCREMENT_EPISODE)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("increment episode"))?;

        found(id, row)
    }

    async fn set_status(&self, id: SeriesId, status: String) -> Result<Series, DomainError> {
        let row = sqlx::query_as::<_, SeriesRow>(SET_STATUS)
            .bind(status)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("update status"))?;

        found(id, row)
    }
}
