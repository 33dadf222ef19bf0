use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Serves the runtime configuration document from a fixed path
///
/// The document is owned by an external writer and is re-read on every
/// request, so callers always see the file as it is on disk right now.
#[derive(Debug, Clone)]
pub struct ConfigHandler {
    path: Arc<PathBuf>,
}

impl ConfigHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the document
    pub async fn get(&self) -> Result<JsonValue, ApiError> {
        let contents = tokio::fs::read_to_string(self.path())
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => ApiError::ConfigNotFound(self.path().to_path_buf()),
                _ => ApiError::ConfigRead(err.to_string()),
            })?;

        Ok(serde_json::from_str(&contents)?)
    }
}

/// GET <base_url>api_extension handler - Return the runtime configuration
#[utoipa::path(
    get,
    path = routes::RUNTIME_CONFIG_DOC,
    responses(
        (status = 200, description = "Current runtime configuration", body = serde_json::Value),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Configuration file not found", body = ErrorResponse),
        (status = 500, description = "Configuration file unreadable or not valid JSON", body = ErrorResponse)
    ),
    tag = "config"
)]
pub async fn runtime_config_handler(
    State(handler): State<ConfigHandler>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    match handler.get().await {
        Ok(data) => {
            tracing::info!("Served runtime config from {}", handler.path().display());
            Ok((StatusCode::OK, Json(data)))
        }
        Err(err @ ApiError::ConfigNotFound(_)) => {
            tracing::warn!("{}", err);
            Err(err)
        }
        Err(err) => {
            tracing::error!("Failed to load {}: {}", handler.path().display(), err);
            Err(err)
        }
    }
}
