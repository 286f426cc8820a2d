//! ResearchDesk HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, ServerConfig, build_weather_service, build_workflow_service, init_telemetry,
};
use presentation_http::{
    routes,
    shutdown::{Drain, serve_with_grace},
    state::AppState,
};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_telemetry(&config.telemetry)?;

    info!("ResearchDesk v{} starting...", env!("CARGO_PKG_VERSION"));

    // Fails on a missing API key before anything is served
    let workflow =
        build_workflow_service(&config).context("Failed to build the research workflow")?;
    let weather = build_weather_service(&config).context("Failed to build the weather service")?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.model,
        "Configuration loaded"
    );

    let state = AppState::new(workflow, weather);

    let mut app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(
            config.server.max_body_size_json_bytes,
        ))
        .layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        app = app.layer(cors_layer(&config.server));
    }

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    match serve_with_grace(server, shutdown_rx, shutdown_timeout).await? {
        Drain::Completed => info!("Server shutdown complete"),
        Drain::TimedOut => warn!("Server stopped with connections still open"),
    }

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
