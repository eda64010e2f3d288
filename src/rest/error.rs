// rest/error.rs — maps failure conditions to the JSON error envelope.
//
// Every error body carries { timestamp, status, error } plus either a
// `message` string or a per-field `errors` map:
//   404 → "Not Found"             message
//   400 → "Validation Failed"     errors
//   500 → "Internal Server Error" message (generic — detail is logged only)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tracing::error;

use crate::tasks::TaskError;

#[derive(Debug)]
pub enum ApiError {
    /// Requested id does not exist in the store.
    NotFound(String),
    /// Request body violates field constraints; field → violation message.
    Validation(BTreeMap<&'static str, String>),
    /// Anything else — storage unavailable etc. Never exposed to the caller.
    Internal(anyhow::Error),
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TaskError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let timestamp = Utc::now().to_rfc3339();
        let (status, body) = match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({
                    "timestamp": timestamp,
                    "status": StatusCode::NOT_FOUND.as_u16(),
                    "error": "Not Found",
                    "message": message,
                }),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "timestamp": timestamp,
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "error": "Validation Failed",
                    "errors": errors,
                }),
            ),
            ApiError::Internal(err) => {
                error!(err = %format!("{err:#}"), "unexpected error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "timestamp": timestamp,
                        "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        "error": "Internal Server Error",
                        "message": "An unexpected error occurred",
                    }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
