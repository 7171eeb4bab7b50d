use super::*;

#[test]
fn from_config_applies_limits_and_ttl() {
    let state = test_helpers::test_app_state_with_limit(7);
    assert_eq!(state.rate_limiter.limit(), 7);
    assert_eq!(state.accounts.tokens().ttl(), ServerConfig::default().token_ttl);
}

#[test]
fn clones_share_metrics_and_cache() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    other.metrics.record_rate_limit("10.0.0.9");
    assert_eq!(state.metrics.snapshot().rate_limit_hits["10.0.0.9"], 1);
    assert_eq!(state.accounts.cache().stats().entries, 0);
}

#[tokio::test]
async fn test_state_uses_memory_backend() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.accounts.repo().backend(), "memory");
    assert_eq!(state.accounts.repo().count().await.unwrap(), 0);
}
