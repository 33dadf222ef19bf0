use crate::config::Config;
use std::sync::Arc;

/// Shared host state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_token: Arc<str>,
}

impl AppState {
    /// Build the host state, generating an access token when none is configured
    pub fn new(config: Config) -> Self {
        let auth_token: Arc<str> = match &config.auth_token {
            Some(token) => Arc::from(token.as_str()),
            None => Arc::from(uuid::Uuid::new_v4().simple().to_string()),
        };

        Self {
            config: Arc::new(config),
            auth_token,
        }
    }
}
