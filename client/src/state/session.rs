//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<Session>` context by `App`. The route guard reads
//! [`Session::is_authenticated`] to decide which views are reachable; pages
//! drive the transitions below after their `/v1` calls resolve.
//!
//! Every transition that changes the token writes through to storage in the
//! same call, so a reload always restores the state last shown on screen.
//!
//! A restored token may already be dead server-side. The first bearer call
//! that comes back 401 goes through [`Session::expire`], which flips the
//! guard back to the login view.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::profile::CachedProfile;
use crate::net::api::RequestError;
use crate::net::types::{LoginResponse, RegisterRequest};
use crate::util::storage::{Storage, TOKEN_KEY};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    pub profile: CachedProfile,
    /// A login request is in flight; the submit button is disabled.
    pub pending: bool,
    /// Last user-facing error from an auth call.
    pub error: Option<String>,
}

impl Session {
    /// Rebuild from storage. A blank stored token counts as absent.
    #[must_use]
    pub fn restore(storage: &dyn Storage) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        Self { token, profile: CachedProfile::load(storage), pending: false, error: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value, when authenticated.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Mark a login as in flight. Returns `false` if one already is, or if
    /// the session is already authenticated.
    pub fn begin_login(&mut self) -> bool {
        if self.pending || self.is_authenticated() {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Apply a successful login. Returns whether the guard flipped to
    /// authenticated; a duplicate completion returns `false` and changes
    /// nothing.
    pub fn complete_login(&mut self, storage: &dyn Storage, response: LoginResponse, password: &str) -> bool {
        self.pending = false;
        if self.is_authenticated() {
            return false;
        }
        storage.set(TOKEN_KEY, &response.token);
        self.profile = CachedProfile::from_server(response.profile, password);
        self.profile.save(storage);
        self.token = Some(response.token);
        self.error = None;
        log::info!("logged in as {}", self.profile.username);
        true
    }

    /// Record a failed login. Token and profile are untouched.
    pub fn fail_login(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
    }

    /// Cache the submitted registration fields for the login view. The
    /// session stays unauthenticated.
    pub fn complete_register(&mut self, storage: &dyn Storage, request: &RegisterRequest) {
        self.profile = CachedProfile::from_registration(request);
        self.profile.save(storage);
        self.error = None;
    }

    /// Drop the token. Idempotent; the cached profile is kept for the next
    /// login.
    pub fn logout(&mut self, storage: &dyn Storage) {
        storage.remove(TOKEN_KEY);
        self.token = None;
        self.pending = false;
        self.error = None;
    }

    /// End the session because the server rejected the token. Same as
    /// [`logout`](Self::logout) but keeps `message` for the login view.
    pub fn expire(&mut self, storage: &dyn Storage, message: impl Into<String>) {
        self.logout(storage);
        self.error = Some(message.into());
        log::info!("session expired");
    }

    /// Expire the session if `error` is a 401. Returns whether it did.
    pub fn handle_request_error(&mut self, storage: &dyn Storage, error: &RequestError) -> bool {
        match error {
            RequestError::Unauthorized(message) => {
                self.expire(storage, message.clone());
                true
            }
            RequestError::Failed(_) => false,
        }
    }

    /// Apply the result of `DELETE /v1/delete`. On success the token and
    /// cached profile are cleared and `true` is returned. A 401 expires the
    /// session; any other failure only sets the error message.
    pub fn complete_delete(&mut self, storage: &dyn Storage, result: Result<(), RequestError>) -> bool {
        match result {
            Ok(()) => {
                storage.remove(TOKEN_KEY);
                CachedProfile::clear(storage);
                *self = Self::default();
                true
            }
            Err(error) => {
                if !self.handle_request_error(storage, &error) {
                    self.error = Some(error.to_string());
                }
                false
            }
        }
    }
}
