//! Application-wide constants and default values

/// HTTP server defaults
pub mod server {
    /// Address the daemon listens on; the port is fixed for every storage mode
    pub const LISTEN_ADDR: &str = "0.0.0.0:8080";
}

/// PostgreSQL connection defaults
pub mod database {
    pub const DEFAULT_HOST: &str = "localhost";
    pub const DEFAULT_PORT: u16 = 5432;

    /// Upper bound on pooled connections
    pub const MAX_CONNECTIONS: u32 = 10;

    /// Seconds to wait for a pooled connection before failing the request
    pub const ACQUIRE_TIMEOUT_SEC: u64 = 5;
}

/// Logging defaults
pub mod logging {
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
