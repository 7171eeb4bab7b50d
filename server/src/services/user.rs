//! User records, personalization categories, and input validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the repository, the cache, and the account service. Validation
//! lives here so registration and password updates apply identical rules.

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 20;
pub const MIN_EMAIL_LEN: usize = 3;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_NAME_LEN: usize = 64;

// =============================================================================
// CATEGORY
// =============================================================================

/// Personalization cluster used to curate the discovery feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Category {
    Saver,
    Spender,
    AntiUser,
    Young,
}

impl Category {
    /// Category assigned to freshly registered accounts.
    pub const DEFAULT: Self = Self::AntiUser;

    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            Self::Saver => 0,
            Self::Spender => 1,
            Self::AntiUser => 2,
            Self::Young => 3,
        }
    }
}

impl From<Category> for i32 {
    fn from(value: Category) -> Self {
        value.id()
    }
}

impl TryFrom<i32> for Category {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Saver),
            1 => Ok(Self::Spender),
            2 => Ok(Self::AntiUser),
            3 => Ok(Self::Young),
            other => Err(format!("unknown category {other}")),
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Stored user row. `password_hash` is always a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub category: Category,
}

/// Public projection of a user, returned to clients after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
        }
    }
}

/// Registration input before hashing.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("username must be {MIN_USERNAME_LEN}-{MAX_USERNAME_LEN} characters")]
    UsernameLength,
    #[error("username contains invalid characters")]
    UsernameCharacters,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters long")]
    PasswordTooShort,
    #[error("password too long")]
    PasswordTooLong,
    #[error("invalid email format")]
    Email,
    #[error("{0} too long")]
    NameTooLong(&'static str),
}

/// Check username shape: 3-20 chars of `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// Returns the first rule the username violates.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Missing("username"));
    }
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username.len()) {
        return Err(ValidationError::UsernameLength);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ValidationError::UsernameCharacters);
    }
    Ok(())
}

/// Check password length bounds (bytes).
///
/// # Errors
///
/// Returns an error when the password is empty, too short, or too long.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Missing("password"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Check that an email looks like `local@domain.tld`.
///
/// # Errors
///
/// Returns [`ValidationError::Email`] on any malformed address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Missing("email"));
    }
    if email.len() < MIN_EMAIL_LEN || email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::Email);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::Email);
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::Email);
    };
    if local.is_empty() || domain.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::Email);
    }
    Ok(())
}

fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    if value.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(field));
    }
    Ok(())
}

impl NewUser {
    /// Trim whitespace around the identity fields. Passwords are left as typed.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_owned();
        self.last_name = self.last_name.trim().to_owned();
        self.email = self.email.trim().to_owned();
        self.username = self.username.trim().to_owned();
        self
    }

    /// Validate every registration field.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)?;
        validate_email(&self.email)?;
        validate_username(&self.username)?;
        validate_password(&self.password)
    }
}
