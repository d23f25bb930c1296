//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers when the completion gateway itself fails.
/// The underlying cause is logged, never exposed.
pub const ANALYZE_FAILED: &str = "Failed to call the completion API.";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// The request body was missing, not JSON, or the wrong shape.
  #[error("invalid request body: {0}")]
  InvalidBody(#[from] JsonRejection),

  #[error("completion gateway error: {0}")]
  Gateway(#[from] reach_gateway::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::InvalidBody(rejection) => {
        (rejection.status(), rejection.body_text())
      }
      ApiError::Gateway(_) => {
        (StatusCode::INTERNAL_SERVER_ERROR, ANALYZE_FAILED.to_owned())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
