//! REST API helpers for the `/v1` endpoints.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: stubs returning an error, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` return `Result<_, String>`. The error string is the
//! server's `{"error": ...}` message when present, otherwise a generic
//! `request failed: <status>` or the transport error text.
//!
//! Bearer calls return [`RequestError`] instead, so a 401 (expired or
//! rejected token) can end the session rather than strand the user on a
//! protected view. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginResponse, RegisterRequest};
#[cfg(feature = "csr")]
use super::types::{AdsResponse, ErrorResponse, LoginRequest, MessageResponse, UpdatePasswordRequest};

/// Failure of a bearer-authenticated call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server rejected the token.
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Failed(String),
}

impl RequestError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<String> for RequestError {
    fn from(message: String) -> Self {
        Self::Failed(message)
    }
}

#[cfg(any(test, feature = "csr"))]
fn classify(status: u16, message: String) -> RequestError {
    if status == 401 {
        RequestError::Unauthorized(message)
    } else {
        RequestError::Failed(message)
    }
}

const DEFAULT_API_BASE: &str = "https://localhost:8443";

/// Base URL of the API, fixed at compile time by `DASHBOARD_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    match option_env!("DASHBOARD_API_BASE") {
        Some(base) if !base.is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/v1/{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn pick_error_message(status: u16, server_error: Option<String>) -> String {
    server_error
        .map(|e| e.trim().to_owned())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| request_failed_message(status))
}

#[cfg(not(feature = "csr"))]
fn unavailable<T, E: From<String>>() -> Result<T, E> {
    Err(E::from("not available outside the browser".to_owned()))
}

#[cfg(feature = "csr")]
async fn request_error(resp: gloo_net::http::Response) -> RequestError {
    let status = resp.status();
    classify(status, error_message(resp).await)
}

#[cfg(feature = "csr")]
async fn error_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let server_error = resp.json::<ErrorResponse>().await.ok().map(|body| body.error);
    pick_error_message(status, server_error)
}

/// `POST /v1/login`.
///
/// # Errors
///
/// Returns the server message on a non-OK status or the transport error.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&endpoint(api_base(), "login"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        unavailable()
    }
}

/// `POST /v1/register`. Returns the server's confirmation message.
///
/// # Errors
///
/// Returns the server message on a non-OK status or the transport error.
pub async fn register(request: &RegisterRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(api_base(), "register"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        unavailable()
    }
}

/// `GET /v1/get_ads`. Returns the caller's personalization category.
///
/// # Errors
///
/// `Unauthorized` on a 401, otherwise `Failed` with the server message or
/// transport error.
pub async fn get_ads(bearer: &str) -> Result<i32, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base(), "get_ads"))
            .header("Authorization", bearer)
            .send()
            .await
            .map_err(|e| RequestError::Failed(e.to_string()))?;
        if !resp.ok() {
            return Err(request_error(resp).await);
        }
        let body: AdsResponse = resp.json().await.map_err(|e| RequestError::Failed(e.to_string()))?;
        Ok(body.category)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = bearer;
        unavailable()
    }
}

/// `POST /v1/update`. Changes the caller's password.
///
/// # Errors
///
/// `Unauthorized` on a 401, otherwise `Failed`.
pub async fn update_password(bearer: &str, old_password: &str, new_password: &str) -> Result<String, RequestError> {
    #[cfg(feature = "csr")]
    {
        let body = UpdatePasswordRequest {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&endpoint(api_base(), "update"))
            .header("Authorization", bearer)
            .json(&body)
            .map_err(|e| RequestError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestError::Failed(e.to_string()))?;
        if !resp.ok() {
            return Err(request_error(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| RequestError::Failed(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bearer, old_password, new_password);
        unavailable()
    }
}

/// `DELETE /v1/delete`. Deletes the caller's account.
///
/// # Errors
///
/// `Unauthorized` on a 401, otherwise `Failed`.
pub async fn delete_account(bearer: &str) -> Result<(), RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(api_base(), "delete"))
            .header("Authorization", bearer)
            .send()
            .await
            .map_err(|e| RequestError::Failed(e.to_string()))?;
        if !resp.ok() {
            return Err(request_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = bearer;
        unavailable()
    }
}
