mod config;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::ServiceConfig;

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Clone)]
struct AppState {
    home_page: Arc<str>,
}

impl AppState {
    /// Reads the page template once; a missing template fails startup.
    fn load(config: &ServiceConfig) -> anyhow::Result<Self> {
        let path = config.template_path();
        let home_page = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read home page template {}", path.display()))?;
        Ok(Self {
            home_page: home_page.into(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let state = AppState::load(&config)?;
    let app = router(&config, state);

    info!("home-service listening on {}", config.addr);
    info!("serving web assets from {}", config.web_dir.display());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("home-service stopped");
    Ok(())
}

fn router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health))
        .route("/version", get(version))
        .nest_service("/css", ServeDir::new(config.static_dir("css")))
        .nest_service("/js", ServeDir::new(config.static_dir("js")))
        .nest_service("/pkg", ServeDir::new(config.pkg_dir()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(state.home_page.to_string())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "home-service",
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "home-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}
