use axum::http::{header, Method};
use axum::Router;
use configs::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::routes;
use crate::store::AppState;

/// Any origin may call the API; only the methods and header the client uses are allowed.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Derive the shared state from configuration. A missing connection string
/// is not fatal: the data routes report it per request instead.
pub fn build_state(cfg: &AppConfig) -> AppState {
    let db = &cfg.database;
    if !db.is_configured() {
        warn!(event = "store_unconfigured", "DATABASE_URL not set; /api routes will answer 500");
        return AppState::unconfigured();
    }
    if let Err(e) = db.validate() {
        warn!(event = "store_config_suspect", error = %e, "database settings look invalid; requests may fail");
    }
    AppState::new(db.clone())
}

pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(build_state(cfg), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by termination");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: load configuration, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
