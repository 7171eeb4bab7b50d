//! Cached profile and the password-gated edit mode.
//!
//! DESIGN
//! ======
//! The cached profile keeps a SHA-256 digest of the account password, never
//! the plaintext. The edit gate compares the digest of what the user types
//! against it, entirely client-side:
//!
//! ```text
//! Locked --request_edit--> Prompting --confirm(ok)--> Unlocked --save--> Locked
//!                              |  ^                        |
//!                   confirm(bad)  |                      cancel
//!                              +--+                        v
//!                                                        Locked
//! ```
//!
//! A wrong or empty password keeps the gate in `Prompting` with an error so
//! the user can retry without reloading.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::net::types::{ProfileData, RegisterRequest};
use crate::util::storage::{Storage, USER_DATA_KEY, load_json, save_json};

/// Hex SHA-256 of `password`.
#[must_use]
pub fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for b in digest.iter() {
        let _ = write!(hex, "{b:02x}");
    }
    hex
}

// =============================================================================
// CACHED PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    /// Empty when no password has been captured in this browser.
    #[serde(default)]
    pub password_digest: String,
}

impl CachedProfile {
    #[must_use]
    pub fn load(storage: &dyn Storage) -> Self {
        load_json(storage, USER_DATA_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &dyn Storage) {
        save_json(storage, USER_DATA_KEY, self);
    }

    pub fn clear(storage: &dyn Storage) {
        storage.remove(USER_DATA_KEY);
    }

    #[must_use]
    pub fn from_server(profile: ProfileData, password: &str) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            username: profile.username,
            password_digest: password_digest(password),
        }
    }

    #[must_use]
    pub fn from_registration(request: &RegisterRequest) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            username: request.username.clone(),
            password_digest: password_digest(&request.password),
        }
    }

    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        !self.password_digest.is_empty() && self.password_digest == password_digest(candidate)
    }

    pub fn set_password(&mut self, password: &str) {
        self.password_digest = password_digest(password);
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Editable profile fields while the gate is unlocked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&CachedProfile> for ProfileDraft {
    fn from(profile: &CachedProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }
}

// =============================================================================
// EDIT GATE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateError {
    EmptyPassword,
    WrongPassword,
    NotPrompting,
    NotUnlocked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditGate {
    #[default]
    Locked,
    Prompting {
        error: Option<GateError>,
    },
    Unlocked,
}

impl EditGate {
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Unlocked)
    }

    #[must_use]
    pub fn is_prompting(&self) -> bool {
        matches!(self, Self::Prompting { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<GateError> {
        match self {
            Self::Prompting { error } => *error,
            _ => None,
        }
    }

    /// Open the password prompt. No-op unless locked.
    pub fn request_edit(&mut self) {
        if matches!(self, Self::Locked) {
            *self = Self::Prompting { error: None };
        }
    }

    /// Check `input` against the cached password digest.
    ///
    /// # Errors
    ///
    /// `EmptyPassword` / `WrongPassword` keep the prompt open with the error
    /// recorded. `NotPrompting` means no prompt is open.
    pub fn confirm(&mut self, input: &str, profile: &CachedProfile) -> Result<(), GateError> {
        if !self.is_prompting() {
            return Err(GateError::NotPrompting);
        }
        let outcome = if input.is_empty() {
            Err(GateError::EmptyPassword)
        } else if profile.password_matches(input) {
            Ok(())
        } else {
            Err(GateError::WrongPassword)
        };
        *self = match outcome {
            Ok(()) => Self::Unlocked,
            Err(e) => Self::Prompting { error: Some(e) },
        };
        outcome
    }

    /// Close the prompt or abandon an edit session without saving.
    pub fn cancel(&mut self) {
        *self = Self::Locked;
    }

    /// Commit `draft` into `profile`, persist it, and lock again.
    ///
    /// # Errors
    ///
    /// Returns `NotUnlocked` if editing was never unlocked.
    pub fn save(&mut self, storage: &dyn Storage, profile: &mut CachedProfile, draft: ProfileDraft) -> Result<(), GateError> {
        if !self.is_editable() {
            return Err(GateError::NotUnlocked);
        }
        profile.first_name = draft.first_name.trim().to_owned();
        profile.last_name = draft.last_name.trim().to_owned();
        profile.email = draft.email.trim().to_owned();
        profile.save(storage);
        *self = Self::Locked;
        Ok(())
    }
}

// =============================================================================
// PASSWORD CHANGE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordChangeError {
    EmptyOld,
    WrongOld,
    EmptyNew,
    SamePassword,
}

/// Client-side checks before calling `/v1/update`.
///
/// # Errors
///
/// Returns the first failing check.
pub fn check_password_change(profile: &CachedProfile, old: &str, new: &str) -> Result<(), PasswordChangeError> {
    if old.is_empty() {
        return Err(PasswordChangeError::EmptyOld);
    }
    if !profile.password_matches(old) {
        return Err(PasswordChangeError::WrongOld);
    }
    if new.is_empty() {
        return Err(PasswordChangeError::EmptyNew);
    }
    if new == old {
        return Err(PasswordChangeError::SamePassword);
    }
    Ok(())
}
