use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::AppState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to the store and make sure every table exists.
pub async fn build_state(db_cfg: &DatabaseConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_with_config(db_cfg).await?;
    models::db::migrate(&db).await?;
    info!(event = "schema_ready", "tables created or already present");
    Ok(AppState::new(db))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Load config from `config.toml` / env and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_env()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "school api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}
