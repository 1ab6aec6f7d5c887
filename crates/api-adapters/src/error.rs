//! Adapter-level error mapping.
//!
//! The feed contract never surfaces "not found" or validation failures, so
//! the only thing that can go wrong in a handler is the store itself. This
//! type keeps handler signatures honest `Result`s and gives the adapter one
//! place that turns a domain failure into a response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] domains::DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = Json(json!({
            "error": {
                "code": "INTERNAL_ERROR",
                "message": "internal server error",
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
