use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::{Repositories, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(5000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Config with env fallbacks; jwt secret falls back to JWT_SECRET.
    let (jwt_secret, uploads_dir) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.auth.jwt_secret, cfg.uploads.dir),
        Err(_) => (
            env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string()),
            "uploads".to_string(),
        ),
    };

    common::env::ensure_env(&uploads_dir).await?;

    // DB connection
    let db = models::db::connect().await?;

    let state = ServerState::new(Repositories::seaorm(db), &jwt_secret, &uploads_dir);

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
