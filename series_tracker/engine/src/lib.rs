//! Watch-progress tracker for TV series.
//!
//! The crate is laid out in layers:
//!
//! - [`domain`]: the `Series` entity, its value objects, errors and the store port
//! - [`infrastructure`]: store adapters (in-memory and PostgreSQL) and their configuration
//! - [`application`]: the composition root handed to every request handler
//! - [`adapters`]: the REST API that drives the application

pub mod adapters;
pub mod application;
pub mod constants;
pub mod domain;
pub mod infrastructure;
