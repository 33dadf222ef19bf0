use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

pub const DEFAULT_RUNTIME_CONFIG_PATH: &str = "/tmp/runtime-cfg/runtime-config.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub runtime_config_path: PathBuf,
    pub base_url: String,
    pub auth_token: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let runtime_config_path = var("RUNTIME_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RUNTIME_CONFIG_PATH));

        let base_url = var("BASE_URL").unwrap_or_else(|| "/".to_string());

        let auth_token = var("AUTH_TOKEN");

        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "8888".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            runtime_config_path,
            base_url,
            auth_token,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Runtime config file: {}", self.runtime_config_path.display());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Auth token: {}",
            if self.auth_token.is_some() { "provided" } else { "generated at startup" }
        );
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
