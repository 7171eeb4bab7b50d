//! API error type and its JSON response mapping.
//!
//! Every failure leaves the server as `{"error": "..."}` with a status code
//! chosen from the error kind. Internal errors are logged with their cause
//! and answered with a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::account::AccountError;
use crate::services::token::TokenError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Rate limit exceeded")]
    RateLimited { retry_after_secs: u64 },
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(ErrorBody { error: self.to_string() })).into_response();
        if let Self::RateLimited { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
        }
        response
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(e) => Self::BadRequest(e.to_string()),
            AccountError::SamePassword => {
                Self::BadRequest("New password cannot be the same as the old one".into())
            }
            AccountError::InvalidCredentials => {
                Self::Unauthorized("Incorrect username or password".into())
            }
            AccountError::UsernameTaken => Self::Conflict("Username already exists".into()),
            AccountError::NotFound => Self::NotFound("User not found".into()),
            AccountError::Repo(_) | AccountError::Password(_) | AccountError::Token(_) => {
                tracing::error!(error = %err, "account operation failed");
                Self::Internal
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::Unauthorized("Token expired".into()),
            TokenError::Invalid(_) => Self::Unauthorized("Invalid token".into()),
            TokenError::Signing(_) => {
                tracing::error!(error = %err, "token signing failed");
                Self::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::BadRequest("Invalid JSON".into())
    }
}
