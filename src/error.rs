use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error type for the runtime configuration endpoint
///
/// Only two failure classes are distinguished: the document is absent, or
/// anything else went wrong while reading or decoding it.
#[derive(Debug)]
pub enum ApiError {
    /// Configuration file does not exist
    ConfigNotFound(PathBuf),
    /// Configuration file could not be read or is not valid JSON
    ConfigRead(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ConfigNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ConfigRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ConfigNotFound(path) => write!(f, "Not found: {}", path.display()),
            ApiError::ConfigRead(err) => write!(f, "Read error: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::ConfigRead(err.to_string())
    }
}
