//! Infrastructure Layer
//!
//! This module contains the adapters that implement the ports defined in the domain layer.
//! These are the "driven adapters" (infrastructure implementations).
//!
//! ## Adapters
//!
//! - `InMemorySeriesRepository`: mutex-guarded storage living as long as the process
//! - `PostgresSeriesRepository`: parameterized SQL over a `sqlx` connection pool
//!
//! ## Usage
//!
//! ```rust,no_run
//! use st_engine::domain::ports::SeriesRepository;
//! use st_engine::infrastructure::InMemorySeriesRepository;
//! use std::sync::Arc;
//!
//! let repository: Arc<dyn SeriesRepository> = Arc::new(InMemorySeriesRepository::new());
//!
//! // Wire into the application...
//! ```

pub mod config;
pub mod in_memory_repository;
pub mod postgres_repository;

pub use config::{ConfigError, DatabaseConfig, StorageMode};
pub use in_memory_repository::InMemorySeriesRepository;
pub use postgres_repository::PostgresSeriesRepository;
