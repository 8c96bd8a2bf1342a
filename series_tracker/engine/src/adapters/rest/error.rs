//! REST error mapping
//!
//! Errors are answered with a status code and a plain-text message.

use crate::domain::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Path identifier is not an integer
    #[error("Invalid ID")]
    InvalidId,

    /// Body is not valid JSON for the expected shape
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Series not found")]
    NotFound,

    /// No route matches the request path
    #[error("404 page not found")]
    UnknownRoute,

    /// The store failed; details stay in the server log
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::SeriesNotFound(_) => ApiError::NotFound,
            DomainError::Storage(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
