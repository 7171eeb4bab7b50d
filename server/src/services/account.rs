//! Account operations: login, registration, password change, deletion, and
//! category lookup.
//!
//! ARCHITECTURE
//! ============
//! Reads go through the [`UserCache`] first and fall back to the
//! [`UserRepo`]; every successful read or write refreshes the cache. Writes
//! always hit the repository before the cache so a failed write never leaves
//! a phantom cached user.
//!
//! ERROR HANDLING
//! ==============
//! Unknown usernames and wrong passwords both surface as
//! [`AccountError::InvalidCredentials`] on login so callers cannot probe
//! which accounts exist.

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;

use std::sync::Arc;

use uuid::Uuid;

use super::cache::UserCache;
use super::password::{self, PasswordError};
use super::repo::{RepoError, UserRepo};
use super::token::{TokenError, TokenManager};
use super::user::{self, Category, NewUser, Profile, User, ValidationError};
use crate::metrics::Metrics;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("unauthorized: incorrect username or password")]
    InvalidCredentials,
    #[error("validation: new password cannot be the same as the old one")]
    SamePassword,
    #[error("validation: username exists")]
    UsernameTaken,
    #[error("not found: user not found")]
    NotFound,
    #[error("internal: {0}")]
    Repo(#[from] RepoError),
    #[error("internal: {0}")]
    Password(#[from] PasswordError),
    #[error("internal: {0}")]
    Token(#[from] TokenError),
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub profile: Profile,
}

#[derive(Clone)]
pub struct AccountService {
    repo: Arc<dyn UserRepo>,
    cache: UserCache,
    tokens: TokenManager,
    metrics: Metrics,
    bcrypt_cost: u32,
}

impl AccountService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn UserRepo>,
        cache: UserCache,
        tokens: TokenManager,
        metrics: Metrics,
        bcrypt_cost: u32,
    ) -> Self {
        Self { repo, cache, tokens, metrics, bcrypt_cost }
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    #[must_use]
    pub fn cache(&self) -> &UserCache {
        &self.cache
    }

    #[must_use]
    pub fn repo(&self) -> &Arc<dyn UserRepo> {
        &self.repo
    }

    fn observe<T>(&self, operation: &str, result: &Result<T, RepoError>) {
        let ok = match result {
            Ok(_) | Err(RepoError::NotFound | RepoError::Conflict) => true,
            Err(_) => false,
        };
        self.metrics.record_db_operation(operation, ok);
    }

    fn cache_user(&self, user: &User) {
        if let Err(e) = self.cache.insert(user) {
            tracing::warn!(error = %e, "skipping cache insert");
        }
    }

    /// Cache first, repository on miss. A repository hit is cached.
    async fn load_user(&self, username: &str) -> Result<Option<User>, AccountError> {
        if let Some(user) = self.cache.get(username) {
            return Ok(Some(user));
        }
        let result = self.repo.find(username).await;
        self.observe("find", &result);
        let found = result?;
        if let Some(user) = &found {
            self.cache_user(user);
        }
        Ok(found)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for empty fields, `InvalidCredentials` for an
    /// unknown user or wrong password, and internal errors otherwise.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::Missing("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::Missing("password").into());
        }

        let Some(user) = self.load_user(username).await? else {
            tracing::debug!(%username, "login for unknown user");
            return Err(AccountError::InvalidCredentials);
        };
        if !password::verify_async(password.to_owned(), user.password_hash.clone()).await? {
            tracing::debug!(%username, "login with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.username)?;
        tracing::info!(username = %user.username, "user logged in");
        Ok(LoginOutcome { token, profile: Profile::from(&user) })
    }

    /// Create an account. Does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for bad input, `UsernameTaken` for duplicates,
    /// and internal errors otherwise.
    pub async fn register(&self, new_user: NewUser) -> Result<Profile, AccountError> {
        let new_user = new_user.normalized();
        new_user.validate()?;

        if self.cache.contains(&new_user.username) {
            return Err(AccountError::UsernameTaken);
        }
        let existing = self.repo.find(&new_user.username).await;
        self.observe("find", &existing);
        if existing?.is_some() {
            return Err(AccountError::UsernameTaken);
        }

        let password_hash = password::hash_async(new_user.password, self.bcrypt_cost).await?;
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            password_hash,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            category: Category::DEFAULT,
        };

        let inserted = self.repo.insert(&user).await;
        self.observe("insert", &inserted);
        match inserted {
            Ok(()) => {}
            Err(RepoError::Conflict) => return Err(AccountError::UsernameTaken),
            Err(e) => return Err(e.into()),
        }

        self.cache_user(&user);
        tracing::info!(username = %user.username, "user registered");
        Ok(Profile::from(&user))
    }

    /// Change the password of `username` after verifying `old_password`.
    ///
    /// # Errors
    ///
    /// Returns `SamePassword` when nothing would change, `Validation` for a
    /// weak new password, `InvalidCredentials` when the old password is
    /// wrong, and `NotFound` for a deleted account.
    pub async fn update_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AccountError> {
        if old_password.is_empty() {
            return Err(ValidationError::Missing("old_password").into());
        }
        if new_password.is_empty() {
            return Err(ValidationError::Missing("new_password").into());
        }
        if old_password == new_password {
            return Err(AccountError::SamePassword);
        }
        user::validate_password(new_password)?;

        let Some(mut user) = self.load_user(username).await? else {
            return Err(AccountError::NotFound);
        };
        if !password::verify_async(old_password.to_owned(), user.password_hash.clone()).await? {
            return Err(AccountError::InvalidCredentials);
        }

        let password_hash = password::hash_async(new_password.to_owned(), self.bcrypt_cost).await?;
        let updated = self.repo.update_password(&user.username, &password_hash).await;
        self.observe("update", &updated);
        match updated {
            Ok(()) => {}
            Err(RepoError::NotFound) => {
                self.cache.remove(username);
                return Err(AccountError::NotFound);
            }
            Err(e) => return Err(e.into()),
        }

        user.password_hash = password_hash;
        self.cache_user(&user);
        tracing::info!(username = %user.username, "password updated");
        Ok(())
    }

    /// Delete the account and evict it from the cache.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no such user exists.
    pub async fn delete(&self, username: &str) -> Result<(), AccountError> {
        let deleted = self.repo.delete(username).await;
        self.observe("delete", &deleted);
        self.cache.remove(username);
        match deleted {
            Ok(()) => {
                tracing::info!(%username, "user deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(AccountError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Personalization category for the discovery feed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no such user exists.
    pub async fn category(&self, username: &str) -> Result<Category, AccountError> {
        self.load_user(username)
            .await?
            .map(|user| user.category)
            .ok_or(AccountError::NotFound)
    }
}
