use serde_json::Value;

use super::test_support::{TEST_ORIGIN, spawn_app};
use super::*;
use crate::state::test_helpers::{test_app_state, test_app_state_with_limit};

#[test]
fn app_rejects_invalid_origin() {
    assert!(app(test_app_state(), "bad\norigin").is_err());
}

#[tokio::test]
async fn healthz_ok() {
    let base = spawn_app(test_app_state()).await;
    let res = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let base = spawn_app(test_app_state()).await;
    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/v1/login"))
        .header("Origin", TEST_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert_eq!(
        res.headers()["access-control-allow-origin"].to_str().unwrap(),
        TEST_ORIGIN
    );
    assert_eq!(res.headers()["access-control-allow-credentials"].to_str().unwrap(), "true");
}

#[tokio::test]
async fn rate_limit_returns_429_after_limit() {
    let state = test_app_state_with_limit(3);
    let metrics = state.metrics.clone();
    let base = spawn_app(state).await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let res = client.get(format!("{base}/v1/stats")).send().await.unwrap();
        assert_eq!(res.status(), 200);
    }
    let res = client.get(format!("{base}/v1/stats")).send().await.unwrap();
    assert_eq!(res.status(), 429);
    assert!(res.headers().contains_key("retry-after"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Rate limit exceeded");

    assert_eq!(metrics.snapshot().rate_limit_hits["127.0.0.1"], 1);
}

#[tokio::test]
async fn rate_limit_is_per_forwarded_ip() {
    let base = spawn_app(test_app_state_with_limit(1)).await;
    let client = reqwest::Client::new();
    let get = |ip: &'static str| {
        client
            .get(format!("{base}/v1/stats"))
            .header("X-Forwarded-For", ip)
            .send()
    };

    assert_eq!(get("203.0.113.1").await.unwrap().status(), 200);
    assert_eq!(get("203.0.113.1").await.unwrap().status(), 429);
    assert_eq!(get("203.0.113.2").await.unwrap().status(), 200);
}

#[tokio::test]
async fn healthz_is_not_rate_limited() {
    let base = spawn_app(test_app_state_with_limit(1)).await;
    for _ in 0..3 {
        let res = reqwest::get(format!("{base}/healthz")).await.unwrap();
        assert_eq!(res.status(), 200);
    }
}

#[tokio::test]
async fn stats_reports_backend_and_requests() {
    let base = spawn_app(test_app_state()).await;
    let client = reqwest::Client::new();
    client.get(format!("{base}/v1/stats")).send().await.unwrap();

    let body: Value = client
        .get(format!("{base}/v1/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["users"], 0);
    assert_eq!(body["cache"]["entries"], 0);
    assert_eq!(body["metrics"]["requests"]["GET /v1/stats 200"], 1);
}
