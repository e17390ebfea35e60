//! Endpoint error mapping
//!
//! Translates gateway outcomes into HTTP responses. Validation and
//! not-found conditions are expected, client-facing outcomes; anything
//! else is a storage fault answered with a generic 500 body while the
//! detail stays in the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recipes_common::api::types::ErrorResponse;
use recipes_common::Error;

/// Errors surfaced by the recipe endpoints
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input field (422)
    Validation(String),
    /// Referenced recipe does not exist (404)
    NotFound(String),
    /// Unexpected storage failure (500)
    Internal,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(what) => ApiError::NotFound(what),
            Error::InvalidInput(msg) => ApiError::Validation(msg),
            _ => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {what}")),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error. Please check the server logs for details.".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
