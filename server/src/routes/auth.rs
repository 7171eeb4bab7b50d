//! Account routes: login, registration, ads category, password change, and
//! account deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard client stores the token returned by `/v1/login` and sends
//! it as `Authorization: Bearer <token>` on every protected call. Handlers
//! only translate between JSON and [`AccountService`] calls; the business
//! rules live in the service.
//!
//! [`AccountService`]: crate::services::account::AccountService

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Json;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::services::user::{Category, NewUser, Profile};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated caller extracted from the bearer token.
/// Use as a handler parameter to require authentication.
#[derive(Debug, Clone)]
pub struct BearerUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for BearerUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized("Missing or invalid authorization header".into()))?;

        let app_state = AppState::from_ref(state);
        let claims = app_state.accounts.tokens().validate(bearer.token())?;
        Ok(Self { username: claims.username })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    fn new(message: &str) -> Json<Self> {
        Json(Self { message: message.to_owned() })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdsResponse {
    pub category: Category,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /v1/login`: exchange credentials for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    let outcome = state.accounts.login(&req.username, &req.password).await?;
    Ok(Json(LoginResponse { token: outcome.token, profile: outcome.profile }))
}

/// `POST /v1/register`: create an account. The caller logs in separately.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(new_user) = payload?;
    state.accounts.register(new_user).await?;
    Ok((StatusCode::CREATED, MessageBody::new("User added successfully")))
}

/// `GET /v1/get_ads`: personalization category of the caller.
pub async fn get_ads(
    State(state): State<AppState>,
    auth: BearerUser,
) -> Result<Json<AdsResponse>, ApiError> {
    let category = state.accounts.category(&auth.username).await?;
    Ok(Json(AdsResponse { category }))
}

/// `POST /v1/update`: change the caller's password.
pub async fn update(
    State(state): State<AppState>,
    auth: BearerUser,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(req) = payload?;
    state
        .accounts
        .update_password(&auth.username, &req.old_password, &req.new_password)
        .await?;
    Ok(MessageBody::new("User updated successfully"))
}

/// `DELETE /v1/delete`: delete the caller's account.
pub async fn delete(State(state): State<AppState>, auth: BearerUser) -> Result<Json<MessageBody>, ApiError> {
    state.accounts.delete(&auth.username).await?;
    Ok(MessageBody::new("User deleted successfully"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
