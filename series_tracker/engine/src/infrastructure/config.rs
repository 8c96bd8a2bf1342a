//! Storage configuration
//!
//! Selects the store backing the API and describes how to reach PostgreSQL.
//! Values come from the environment:
//!
//! - `ST_STORAGE_MODE`: `memory` (default) | `postgres`
//! - `DB_HOST` (default `localhost`), `DB_PORT` (default `5432`)
//! - `DB_USER`, `DB_NAME`: required when `ST_STORAGE_MODE=postgres`
//! - `DB_PASSWORD`: optional

use crate::constants::database::{DEFAULT_HOST, DEFAULT_PORT};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const STORAGE_MODE_VAR: &str = "ST_STORAGE_MODE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid storage mode '{0}' (expected 'memory' or 'postgres')")]
    InvalidStorageMode(String),

    #[error("Invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),
}

/// Which store backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Mutex-guarded list; contents are lost on restart
    #[default]
    Memory,
    Postgres,
}

impl StorageMode {
    /// Read `ST_STORAGE_MODE`, defaulting to in-memory storage when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(STORAGE_MODE_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" => Ok(Self::Memory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidStorageMode(value.to_string())),
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::Memory => write!(f, "memory"),
            StorageMode::Postgres => write!(f, "postgres"),
        }
    }
}

/// PostgreSQL connection parameters
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Load connection parameters from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("DB_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "DB_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty_var("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            user: non_empty_var("DB_USER").ok_or(ConfigError::MissingVariable("DB_USER"))?,
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            name: non_empty_var("DB_NAME").ok_or(ConfigError::MissingVariable("DB_NAME"))?,
        })
    }

    /// Connection options for sqlx; TLS is disabled
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

// Keeps the password out of logs
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
