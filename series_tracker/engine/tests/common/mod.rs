//! Shared helpers for the REST integration tests
//!
//! Every test builds its own router around a fresh store, so tests never share
//! state and can run in parallel.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use st_engine::adapters::rest::build_router;
use st_engine::application::Application;
use st_engine::domain::ports::SeriesRepository;
use st_engine::domain::{DomainError, Series, SeriesFields, SeriesId, Vote};
use st_engine::infrastructure::InMemorySeriesRepository;
use std::sync::Arc;
use tower::ServiceExt;

/// Router backed by an empty in-memory store
pub fn memory_router() -> Router {
    router_with(Arc::new(InMemorySeriesRepository::new()))
}

pub fn router_with(repository: Arc<dyn SeriesRepository>) -> Router {
    build_router(Arc::new(Application::new(repository)))
}

/// Response parts collected from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {:?}", e, self.body))
    }
}

/// Send one request through the router
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Create a series and return its JSON representation
pub async fn create(router: &Router, body: &str) -> Value {
    let response = send(router, Method::POST, "/api/series", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
    response.json()
}

/// Store whose every operation fails as if the database were down
pub struct FailingRepository;

fn unavailable() -> DomainError {
    DomainError::Storage("connection refused".to_string())
}

#[async_trait]
impl SeriesRepository for FailingRepository {
    async fn create(&self, _fields: SeriesFields) -> Result<Series, DomainError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Series>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: SeriesId) -> Result<Series, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _id: SeriesId, _fields: SeriesFields) -> Result<Series, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: SeriesId) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn adjust_ranking(&self, _id: SeriesId, _vote: Vote) -> Result<Series, DomainError> {
        Err(unavailable())
    }

    async fn increment_episode(&self, _id: SeriesId) -> Result<Series, DomainError> {
        Err(unavailable())
    }

    async fn set_status(&self, _id: SeriesId, _status: String) -> Result<Series, DomainError> {
        Err(unavailable())
    }
}
