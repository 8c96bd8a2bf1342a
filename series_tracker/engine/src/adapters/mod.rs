//! Driving Adapters Layer
//!
//! This module contains the "driving" or "primary" adapters.
//! These adapters drive the application by accepting external requests and translating
//! them into application calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use st_engine::adapters::rest::{build_router, serve_on_tcp};
//! use st_engine::application::Application;
//! use st_engine::infrastructure::InMemorySeriesRepository;
//! use std::sync::Arc;
//!
//! # async fn example() -> std::io::Result<()> {
//! let repository = Arc::new(InMemorySeriesRepository::new());
//! let application = Arc::new(Application::new(repository));
//!
//! let app = build_router(application);
//! serve_on_tcp("0.0.0.0:8080".parse().unwrap(), app, std::future::pending()).await
//! # }
//! ```

pub mod rest;
