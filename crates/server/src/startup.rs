use std::{env, net::SocketAddr};

use axum::Router;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::AppConfig;
use models::db::{connect_and_migrate, DatabaseConfig};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

// Any origin may call the record API.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml, falling back to env vars (SERVER_HOST, SERVER_PORT,
/// DATABASE_URL) when the file is missing or unusable.
fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            // start from built-in defaults and overlay whatever the environment provides
            let mut cfg = AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            // DATABASE_URL, else the local SQLite file
            cfg.database.normalize_from_env();
            cfg.database
                .validate()
                .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok(cfg)
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: connect, migrate, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    // .env may carry DATABASE_URL / SERVER_* when no config.toml is present
    dotenv().ok();

    let cfg = load_config()?;
    // Pool first, then schema: handlers assume both tables exist
    let db_cfg = DatabaseConfig::from(&cfg.database);
    let db = connect_and_migrate(&db_cfg).await?;
    let state = ServerState { db };

    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve; Ctrl+C stops accepting and drains in-flight requests
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
