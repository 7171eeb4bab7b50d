//! User persistence behind the [`UserRepo`] trait.
//!
//! ARCHITECTURE
//! ============
//! `PgUserRepo` is the production store. `MemoryUserRepo` serves dev runs
//! without `DATABASE_URL` and the test suite; both honor the same contract:
//! usernames are unique case-insensitively and `insert` fails with
//! [`RepoError::Conflict`] on a duplicate.

#[cfg(test)]
#[path = "repo_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use sqlx::{PgPool, Row};

use super::user::{Category, User};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("username already exists")]
    Conflict,
    #[error("user not found")]
    NotFound,
    #[error("corrupt user row: {0}")]
    Corrupt(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    /// Look up a user by username (case-insensitive).
    async fn find(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user.
    async fn insert(&self, user: &User) -> Result<(), RepoError>;

    /// Replace the stored password hash.
    async fn update_password(&self, username: &str, password_hash: &str) -> Result<(), RepoError>;

    /// Delete a user.
    async fn delete(&self, username: &str) -> Result<(), RepoError>;

    /// Number of stored users.
    async fn count(&self) -> Result<i64, RepoError>;

    /// Short backend label for logs and stats.
    fn backend(&self) -> &'static str;
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, RepoError> {
    let category: i32 = row.try_get("category")?;
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        category: Category::try_from(category).map_err(RepoError::Corrupt)?,
    })
}

#[async_trait::async_trait]
impl UserRepo for PgUserRepo {
    async fn find(&self, username: &str) -> Result<Option<User>, RepoError> {
        let row = sqlx::query(
            r"SELECT id, username, password_hash, email, first_name, last_name, category
              FROM users WHERE lower(username) = lower($1) LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), RepoError> {
        let result = sqlx::query(
            r"INSERT INTO users (id, username, password_hash, email, first_name, last_name, category)
              VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.category.id())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(RepoError::Conflict),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_password(&self, username: &str, password_hash: &str) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE lower(username) = lower($1)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM users WHERE lower(username) = lower($1)")
            .bind(username)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local store keyed by lowercased username.
#[derive(Clone, Default)]
pub struct MemoryUserRepo {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MemoryUserRepo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl UserRepo for MemoryUserRepo {
    async fn find(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self.lock().get(&username.to_lowercase()).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), RepoError> {
        let mut users = self.lock();
        let key = user.username.to_lowercase();
        if users.contains_key(&key) {
            return Err(RepoError::Conflict);
        }
        users.insert(key, user.clone());
        Ok(())
    }

    async fn update_password(&self, username: &str, password_hash: &str) -> Result<(), RepoError> {
        let mut users = self.lock();
        let user = users
            .get_mut(&username.to_lowercase())
            .ok_or(RepoError::NotFound)?;
        password_hash.clone_into(&mut user.password_hash);
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<(), RepoError> {
        self.lock()
            .remove(&username.to_lowercase())
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(i64::try_from(self.lock().len()).unwrap_or(i64::MAX))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
