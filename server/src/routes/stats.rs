//! Operational endpoints: `/v1/stats` and `/healthz`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use super::error::ApiError;
use crate::metrics::MetricsSnapshot;
use crate::services::cache::CacheStats;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub backend: &'static str,
    pub users: i64,
    pub cache: CacheStats,
    pub metrics: MetricsSnapshot,
}

/// `GET /v1/stats`: cache counters, user count, and request metrics.
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let repo = state.accounts.repo();
    let users = repo.count().await.map_err(|e| {
        tracing::error!(error = %e, "user count failed");
        ApiError::Internal
    })?;
    Ok(Json(StatsResponse {
        backend: repo.backend(),
        users,
        cache: state.accounts.cache().stats(),
        metrics: state.metrics.snapshot(),
    }))
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
