//! Daemon configuration from environment variables
//!
//! All configuration is read from environment variables with sensible defaults.
//! The listen address is fixed; only storage and logging are configurable.

use st_engine::constants::{logging::DEFAULT_LOG_LEVEL, server::LISTEN_ADDR};
use st_engine::infrastructure::{ConfigError, DatabaseConfig, StorageMode};
use std::env;
use std::net::SocketAddr;

/// Daemon configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Store backing the API
    pub storage_mode: StorageMode,

    /// PostgreSQL connection, present only in postgres mode
    pub database: Option<DatabaseConfig>,

    pub listen_addr: SocketAddr,

    /// Log filter directive
    pub log_level: String,
}

impl DaemonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_mode = StorageMode::from_env()?;
        let database = match storage_mode {
            StorageMode::Memory => None,
            StorageMode::Postgres => Some(DatabaseConfig::from_env()?),
        };

        Ok(Self {
            storage_mode,
            database,
            listen_addr: Self::listen_addr(),
            log_level: Self::parse_log_level(),
        })
    }

    fn listen_addr() -> SocketAddr {
        LISTEN_ADDR
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)))
    }

    fn parse_log_level() -> String {
        // Priority: ST_LOG_LEVEL > RUST_LOG > default
        env::var("ST_LOG_LEVEL")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }
}
