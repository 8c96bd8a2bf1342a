//! REST API router configuration

use super::cors::cors;
use super::handlers::{
    create_series, delete_series, downvote_series, get_series, increment_episode, list_series,
    route_not_found, update_series, update_status, upvote_series, AppState,
};
use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the REST API router
///
/// Layers wrap the fallback as well, so unknown paths and `OPTIONS` on any
/// path still receive CORS headers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Series CRUD
        .route("/api/series", post(create_series))
        .route("/api/series", get(list_series))
        .route("/api/series/:id", get(get_series))
        .route("/api/series/:id", put(update_series))
        .route("/api/series/:id", delete(delete_series))
        // Partial updates
        .route("/api/series/:id/status", patch(update_status))
        .route("/api/series/:id/episode", patch(increment_episode))
        .route("/api/series/:id/upvote", patch(upvote_series))
        .route("/api/series/:id/downvote", patch(downvote_series))
        .fallback(route_not_found)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
