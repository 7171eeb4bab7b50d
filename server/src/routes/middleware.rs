//! Request middleware: per-route metrics and per-IP rate limiting.
//!
//! Both run as route layers so [`MatchedPath`] is available and metrics are
//! keyed by route template instead of raw URI.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, MatchedPath, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

/// Resolve the client IP: first `X-Forwarded-For` hop, then `X-Real-IP`,
/// then the socket peer address.
#[must_use]
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(first) = header("x-forwarded-for")
        .and_then(|xff| xff.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return first.to_owned();
    }
    if let Some(real) = header("x-real-ip") {
        return real.to_owned();
    }
    peer.map_or_else(|| "unknown".to_owned(), |addr| addr.ip().to_string())
}

pub async fn track_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_owned(), |p| p.as_str().to_owned());
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    state.metrics.record_request(&method, &path, status, start.elapsed());
    tracing::debug!(%method, %path, status, "request handled");
    response
}

pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ip = client_ip(req.headers(), peer);

    match state.rate_limiter.check_and_record(&ip) {
        Ok(()) => next.run(req).await,
        Err(RateLimitError::Exceeded { retry_after_secs, .. }) => {
            tracing::warn!(%ip, "rate limit exceeded");
            state.metrics.record_rate_limit(&ip);
            ApiError::RateLimited { retry_after_secs }.into_response()
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod tests;
