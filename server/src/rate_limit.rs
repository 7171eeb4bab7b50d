//! In-memory per-IP rate limiting for the `/v1` API.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by client IP. Each client may make `limit` requests per `window`
//! (100/min by default). A rejected request is not recorded, so a client that
//! backs off regains capacity as soon as its oldest request ages out.
//!
//! TRADE-OFFS
//! ==========
//! State is per-process; running several replicas multiplies the effective
//! limit. Idle clients are pruned by [`spawn_cleanup`] once their newest
//! request is older than twice the window, which bounds memory under IP churn.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    Exceeded { limit: usize, window_secs: u64, retry_after_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), limit, window }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check the client's window, then record the request if allowed.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitError::Exceeded`] when the client already made
    /// `limit` requests inside the current window.
    pub fn check_and_record(&self, client_ip: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(client_ip, Instant::now())
    }

    fn check_and_record_at(&self, client_ip: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let deque = inner.entry(client_ip.to_owned()).or_default();
        prune_window(deque, now, self.window);

        if deque.len() >= self.limit {
            let retry_after = deque
                .front()
                .map_or(self.window, |&oldest| self.window.saturating_sub(now.duration_since(oldest)));
            return Err(RateLimitError::Exceeded {
                limit: self.limit,
                window_secs: self.window.as_secs(),
                retry_after_secs: retry_after.as_secs().max(1),
            });
        }

        deque.push_back(now);
        Ok(())
    }

    /// Number of clients currently tracked.
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Drop clients whose newest request is older than twice the window.
    /// Returns how many were removed.
    pub fn cleanup(&self) -> usize {
        self.cleanup_at(Instant::now())
    }

    fn cleanup_at(&self, now: Instant) -> usize {
        let idle_after = self.window.saturating_mul(2);
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = inner.len();
        inner.retain(|_, deque| {
            deque
                .back()
                .is_some_and(|&newest| now.duration_since(newest) <= idle_after)
        });
        before - inner.len()
    }
}

const MAX_CLEANUP_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Run [`RateLimiter::cleanup`] once per window (at most hourly) until the
/// runtime stops.
pub fn spawn_cleanup(limiter: RateLimiter) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let period = limiter.window().clamp(Duration::from_secs(1), MAX_CLEANUP_PERIOD);
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = limiter.cleanup();
            if removed > 0 {
                tracing::debug!(removed, "pruned idle rate-limit clients");
            }
        }
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) >= window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
