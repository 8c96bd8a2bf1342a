//! REST API handlers using axum
//!
//! Bodies are read as raw bytes and decoded with serde_json so that any
//! malformed payload maps to `400 Invalid request payload`, whatever the
//! request `Content-Type`.

use super::error::ApiError;
use crate::application::Application;
use crate::domain::{Series, SeriesFields, SeriesId, Vote};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared application state
pub type AppState = Arc<Application>;

/// Body of `PATCH /api/series/:id/status`; a missing field means an empty status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

fn parse_id(raw: &str) -> Result<SeriesId, ApiError> {
    raw.parse().map_err(|_| {
        debug!(raw_id = %raw, "Rejected non-integer series id");
        ApiError::InvalidId
    })
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected request payload");
        ApiError::InvalidPayload
    })
}

// ===== Handlers =====

/// POST /api/series - Create a series
pub async fn create_series(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Series>), ApiError> {
    info!("REST Create request");

    let fields: SeriesFields = decode_body(&body)?;
    let series = app.create_series(fields).await?;

    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /api/series - List all series
pub async fn list_series(State(app): State<AppState>) -> Result<Json<Vec<Series>>, ApiError> {
    info!("REST List request");

    let series = app.list_series().await?;
    debug!(count = series.len(), "Series listed");

    Ok(Json(series))
}

/// GET /api/series/:id - Get one series
pub async fn get_series(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    info!(series_id = %id, "REST Get request");

    let id = parse_id(&id)?;
    Ok(Json(app.get_series(id).await?))
}

/// PUT /api/series/:id - Replace every field of a series
pub async fn update_series(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Series>, ApiError> {
    info!(series_id = %id, "REST Update request");

    let id = parse_id(&id)?;
    let fields: SeriesFields = decode_body(&body)?;

    Ok(Json(app.update_series(id, fields).await?))
}

/// DELETE /api/series/:id - Delete a series
pub async fn delete_series(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!(series_id = %id, "REST Delete request");

    let id = parse_id(&id)?;
    app.delete_series(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/series/:id/status - Change the watch status
pub async fn update_status(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Series>, ApiError> {
    info!(series_id = %id, "REST Status request");

    let id = parse_id(&id)?;
    let request: UpdateStatusRequest = decode_body(&body)?;

    Ok(Json(app.set_status(id, request.status).await?))
}

/// PATCH /api/series/:id/episode - Mark one more episode as watched
pub async fn increment_episode(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    info!(series_id = %id, "REST Episode request");

    let id = parse_id(&id)?;
    Ok(Json(app.increment_episode(id).await?))
}

/// PATCH /api/series/:id/upvote - Raise the ranking by one
pub async fn upvote_series(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    info!(series_id = %id, "REST Upvote request");

    let id = parse_id(&id)?;
    Ok(Json(app.vote(id, Vote::Up).await?))
}

/// PATCH /api/series/:id/downvote - Lower the ranking by one
pub async fn downvote_series(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    info!(series_id = %id, "REST Downvote request");

    let id = parse_id(&id)?;
    Ok(Json(app.vote(id, Vote::Down).await?))
}

/// Fallback for paths outside the API
pub async fn route_not_found() -> ApiError {
    ApiError::UnknownRoute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("17"), Ok(SeriesId::new(17)));
        assert_eq!(parse_id("seventeen"), Err(ApiError::InvalidId));
        assert_eq!(parse_id(""), Err(ApiError::InvalidId));
    }

    #[test]
    fn test_decode_status_body() {
        let request: UpdateStatusRequest = decode_body(br#"{"status":"watching"}"#).unwrap();
        assert_eq!(request.status, "watching");

        let request: UpdateStatusRequest = decode_body(b"{}").unwrap();
        assert_eq!(request.status, "");

        let empty = decode_body::<UpdateStatusRequest>(b"");
        assert!(matches!(empty, Err(ApiError::InvalidPayload)));

        let mistyped = decode_body::<UpdateStatusRequest>(br#"{"status":3}"#);
        assert!(matches!(mistyped, Err(ApiError::InvalidPayload)));
    }

    #[test]
    fn test_decode_series_body() {
        let fields: SeriesFields =
            decode_body(br#"{"id":500,"title":"Dark","totalEpisodes":26}"#).unwrap();
        assert_eq!(fields.title, "Dark");
        assert_eq!(fields.total_episodes, 26);

        let broken = decode_body::<SeriesFields>(br#"{"title":"Dark""#);
        assert!(matches!(broken, Err(ApiError::InvalidPayload)));
    }
}
