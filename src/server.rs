//! Host side: router assembly, extension loading and graceful shutdown.

use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::auth::require_token;
use crate::extension::{extension_points, route_path, HostContext};
use crate::handlers::health_handler;
use crate::routes;
use crate::state::AppState;

/// Build the host router with every discovered extension mounted behind the token guard
pub fn make_router(state: &AppState) -> Result<Router> {
    let host = HostContext {
        base_url: state.config.base_url.clone(),
        runtime_config_path: state.config.runtime_config_path.clone(),
    };

    let mut protected = Router::new();
    for point in extension_points() {
        let loaded = (point.load)(&host)
            .with_context(|| format!("Failed to load extension '{}'", point.module))?;

        for registration in &loaded.registrations {
            tracing::info!(
                "Registered {} at {} (host pattern {})",
                registration.module,
                registration.path,
                registration.host_pattern.as_regex()
            );
        }
        protected = protected.merge(loaded.router);
    }

    let protected = protected.route_layer(middleware::from_fn_with_state(
        state.auth_token.clone(),
        require_token,
    ));

    let public = Router::new()
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .route(routes::HEALTH, get(health_handler));

    Ok(public.merge(protected).layer(TraceLayer::new_for_http()))
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn serve(state: AppState) -> Result<()> {
    let router = make_router(&state)?;

    let addr = format!("{}:{}", state.config.service_host, state.config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Http server starting on: {}", local_addr);
    if state.config.auth_token.is_none() {
        let route = route_path(&state.config.base_url)?;
        tracing::info!(
            "Access the runtime config at http://{}{}?token={}",
            local_addr,
            route,
            state.auth_token
        );
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Http server failed")?;

    tracing::info!("Http server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
