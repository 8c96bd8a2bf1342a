//! REST API Driving Adapter
//!
//! Exposes the series operations through a JSON HTTP API under `/api/series`,
//! with permissive CORS headers on every response.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::build_router;
pub use server::{serve_on_listener, serve_on_tcp};
