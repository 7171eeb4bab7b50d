//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the account service (repository, cache, token manager), the per-IP
//! rate limiter, and the metrics registry. Every field is cheap to clone and
//! shares its data through an `Arc`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::metrics::Metrics;
use crate::rate_limit::RateLimiter;
use crate::services::account::AccountService;
use crate::services::cache::UserCache;
use crate::services::repo::UserRepo;
use crate::services::token::TokenManager;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub rate_limiter: RateLimiter,
    pub metrics: Metrics,
}

impl AppState {
    #[must_use]
    pub fn new(accounts: AccountService, rate_limiter: RateLimiter, metrics: Metrics) -> Self {
        Self { accounts, rate_limiter, metrics }
    }

    /// Wire every component from the runtime config and a chosen repository.
    #[must_use]
    pub fn from_config(config: &ServerConfig, repo: Arc<dyn UserRepo>, jwt_secret: &[u8]) -> Self {
        let metrics = Metrics::new();
        let accounts = AccountService::new(
            repo,
            UserCache::new(config.cache_ttl),
            TokenManager::new(jwt_secret, config.token_ttl),
            metrics.clone(),
            config.bcrypt_cost,
        );
        let rate_limiter = RateLimiter::new(config.rate_limit_requests, config.rate_limit_window);
        Self::new(accounts, rate_limiter, metrics)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::time::Duration;

    use super::*;
    use crate::services::repo::MemoryUserRepo;

    pub const TEST_SECRET: &[u8] = b"test-secret";

    /// Config tuned for tests: cheapest bcrypt cost, generous rate limit.
    #[must_use]
    pub fn test_config() -> ServerConfig {
        ServerConfig { bcrypt_cost: 4, rate_limit_requests: 1_000, ..ServerConfig::default() }
    }

    /// Create a test `AppState` backed by the in-memory repository.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::from_config(&test_config(), Arc::new(MemoryUserRepo::new()), TEST_SECRET)
    }

    /// Create a test `AppState` with a tight rate limit.
    #[must_use]
    pub fn test_app_state_with_limit(limit: usize) -> AppState {
        let config = ServerConfig {
            rate_limit_requests: limit,
            rate_limit_window: Duration::from_secs(60),
            ..test_config()
        };
        AppState::from_config(&config, Arc::new(MemoryUserRepo::new()), TEST_SECRET)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
