//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors returned by handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("missing user identity")]
    Unauthorized,

    #[error("admin key required")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl From<ewaste_core::Error> for AppError {
    fn from(err: ewaste_core::Error) -> Self {
        match err {
            ewaste_core::Error::Validation(msg) => AppError::InvalidRequest(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request_error"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "authentication_error"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "permission_error"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found_error"),
            AppError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "server_error")
            }
        };

        let body = json!({
            "error": {
                "message": self.to_string(),
                "type": kind,
            }
        });

        (status, Json(body)).into_response()
    }
}
