use runtime_config_api::config::Config;
use runtime_config_api::server;
use runtime_config_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("runtime-config-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::serve(AppState::new(config)).await
}
