use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use imfuse_core::error::CoreError;
use imfuse_fusion::error::FusionError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unprocessable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unprocessable(msg) => {
                tracing::warn!("rejected configuration: {msg}");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Unprocessable(e.to_string())
    }
}

impl From<FusionError> for ApiError {
    fn from(e: FusionError) -> Self {
        match e {
            FusionError::UnknownMode(_) => ApiError::NotFound(e.to_string()),
            FusionError::Record(core) => core.into(),
            FusionError::IndexOutOfRange { .. } => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(e: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
