mod config;
mod db;
mod metrics;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::services::repo::{MemoryUserRepo, PgUserRepo, UserRepo};

const CACHE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::ServerConfig::from_env()?;

    let repo: Arc<dyn UserRepo> = match &config.database_url {
        Some(url) => Arc::new(PgUserRepo::new(db::init_pool(url, config.db_max_connections).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory user store");
            Arc::new(MemoryUserRepo::new())
        }
    };

    let secret = config.jwt_secret.clone().unwrap_or_else(|| {
        tracing::warn!("JWT_SECRET not set; generated a per-process secret, tokens will not survive restarts");
        services::token::generate_secret()
    });

    let state = state::AppState::from_config(&config, repo, secret.as_bytes());

    let _sweeper = services::cache::spawn_sweeper(state.accounts.cache().clone(), CACHE_SWEEP_INTERVAL);
    let _cleanup = rate_limit::spawn_cleanup(state.rate_limiter.clone());

    let app = routes::app(state.clone(), &config.cors_origin)?;
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;

    tracing::info!(
        port = config.port,
        backend = state.accounts.repo().backend(),
        cors_origin = %config.cors_origin,
        "dashboard api listening"
    );
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
