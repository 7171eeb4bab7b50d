//! In-process request and storage counters.
//!
//! DESIGN
//! ======
//! Counters are plain maps behind one mutex; every update is a few map
//! operations, so contention stays negligible at this service's scale.
//! `/v1/stats` serves a [`MetricsSnapshot`] as JSON.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;

#[derive(Default)]
struct MetricsInner {
    /// `"METHOD path status"` -> count.
    requests: BTreeMap<String, u64>,
    /// `"METHOD path"` -> (count, total micros).
    durations: BTreeMap<String, (u64, u128)>,
    /// Client IP -> rejected requests.
    rate_limit_hits: BTreeMap<String, u64>,
    /// `"operation status"` -> count.
    db_operations: BTreeMap<String, u64>,
}

#[derive(Clone, Default)]
pub struct Metrics {
    inner: Arc<Mutex<MetricsInner>>,
}

/// Average latency per route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLatency {
    pub count: u64,
    pub avg_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: BTreeMap<String, u64>,
    pub latency: BTreeMap<String, RouteLatency>,
    pub rate_limit_hits: BTreeMap<String, u64>,
    pub db_operations: BTreeMap<String, u64>,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MetricsInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let mut inner = self.lock();
        *inner
            .requests
            .entry(format!("{method} {path} {status}"))
            .or_default() += 1;
        let slot = inner
            .durations
            .entry(format!("{method} {path}"))
            .or_default();
        slot.0 += 1;
        slot.1 += elapsed.as_micros();
    }

    pub fn record_rate_limit(&self, client_ip: &str) {
        *self
            .lock()
            .rate_limit_hits
            .entry(client_ip.to_owned())
            .or_default() += 1;
    }

    pub fn record_db_operation(&self, operation: &str, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        *self
            .lock()
            .db_operations
            .entry(format!("{operation} {status}"))
            .or_default() += 1;
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let inner = self.lock();
        let latency = inner
            .durations
            .iter()
            .map(|(route, &(count, micros))| {
                let avg_ms = if count == 0 { 0.0 } else { micros as f64 / count as f64 / 1000.0 };
                (route.clone(), RouteLatency { count, avg_ms })
            })
            .collect();
        MetricsSnapshot {
            requests: inner.requests.clone(),
            latency,
            rate_limit_hits: inner.rate_limit_hits.clone(),
            db_operations: inner.db_operations.clone(),
        }
    }
}
