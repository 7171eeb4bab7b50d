//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/v1` JSON API used by the dashboard client plus a
//! bare `/healthz` probe. Request flow for `/v1`:
//!
//! CORS -> trace -> metrics -> rate limit -> handler
//!
//! The server must be started with
//! `into_make_service_with_connect_info::<SocketAddr>()` so the rate limiter
//! can fall back to the peer address when no proxy headers are present.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod stats;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
#[error("invalid CORS origin: {0:?}")]
pub struct InvalidOrigin(String);

/// Build the full application router.
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn app(state: AppState, cors_origin: &str) -> Result<Router, InvalidOrigin> {
    let origin = HeaderValue::from_str(cors_origin).map_err(|_| InvalidOrigin(cors_origin.to_owned()))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    Ok(Router::new()
        .merge(api_routes(state))
        .route("/healthz", get(stats::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/login", post(auth::login))
        .route("/v1/register", post(auth::register))
        .route("/v1/get_ads", get(auth::get_ads))
        .route("/v1/update", post(auth::update))
        .route("/v1/delete", delete(auth::delete))
        .route("/v1/stats", get(stats::stats))
        .route_layer(from_fn_with_state(state.clone(), middleware::rate_limit))
        .route_layer(from_fn_with_state(state.clone(), middleware::track_metrics))
        .with_state(state)
}

// =============================================================================
// TEST SUPPORT
// =============================================================================

#[cfg(test)]
pub mod test_support {
    use std::net::SocketAddr;

    use super::*;

    pub const TEST_ORIGIN: &str = "http://localhost:5173";

    /// Serve the router on an ephemeral port and return its base URL.
    pub async fn spawn_app(state: AppState) -> String {
        let router = app(state, TEST_ORIGIN).unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
                .await
                .unwrap();
        });
        format!("http://{addr}")
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
