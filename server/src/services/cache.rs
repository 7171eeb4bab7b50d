//! Read-through user cache with per-entry TTL.
//!
//! DESIGN
//! ======
//! Entries are keyed by `cache:user:` + hex(SHA-256(normalized username)) so
//! raw usernames never appear as keys. Expired entries are dropped lazily on
//! read and eagerly by [`spawn_sweeper`].
//!
//! Cached rows carry the bcrypt hash, never a plaintext password.

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::user::User;

pub const KEY_PREFIX: &str = "cache:user:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheKeyError {
    #[error("username cannot be empty")]
    Empty,
    #[error("username contains invalid characters")]
    ControlCharacters,
}

/// Derive the namespaced cache key for `username`.
///
/// # Errors
///
/// Returns an error for empty usernames or ones with `\r`, `\n`, `\t`, or NUL.
pub fn cache_key(username: &str) -> Result<String, CacheKeyError> {
    if username.contains(['\r', '\n', '\t', '\0']) {
        return Err(CacheKeyError::ControlCharacters);
    }
    let normalized = username.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(CacheKeyError::Empty);
    }
    let digest = Sha256::digest(normalized.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{KEY_PREFIX}{hex}"))
}

/// Snapshot of cache counters, served on `/v1/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
}

struct Entry {
    user: User,
    /// `None` when the TTL runs past the clock's range.
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

struct CacheInner {
    entries: HashMap<String, Entry>,
    hits: u64,
    misses: u64,
    expirations: u64,
}

#[derive(Clone)]
pub struct UserCache {
    inner: Arc<Mutex<CacheInner>>,
    ttl: Duration,
}

impl UserCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
                expirations: 0,
            })),
            ttl,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch a live entry. Counts a hit or a miss.
    #[must_use]
    pub fn get(&self, username: &str) -> Option<User> {
        self.get_at(username, Instant::now())
    }

    fn get_at(&self, username: &str, now: Instant) -> Option<User> {
        let key = cache_key(username).ok()?;
        let mut inner = self.lock();
        let live = match inner.entries.get(&key) {
            Some(entry) if entry.is_live(now) => Some(entry.user.clone()),
            Some(_) => {
                inner.entries.remove(&key);
                inner.expirations += 1;
                None
            }
            None => None,
        };
        if live.is_some() {
            inner.hits += 1;
        } else {
            inner.misses += 1;
        }
        live
    }

    /// Insert or refresh an entry; the TTL restarts.
    ///
    /// # Errors
    ///
    /// Returns an error if the username cannot form a cache key.
    pub fn insert(&self, user: &User) -> Result<(), CacheKeyError> {
        self.insert_at(user, Instant::now())
    }

    fn insert_at(&self, user: &User, now: Instant) -> Result<(), CacheKeyError> {
        let key = cache_key(&user.username)?;
        let entry = Entry { user: user.clone(), expires_at: now.checked_add(self.ttl) };
        self.lock().entries.insert(key, entry);
        Ok(())
    }

    /// Drop an entry. Returns whether one was present.
    pub fn remove(&self, username: &str) -> bool {
        let Ok(key) = cache_key(username) else {
            return false;
        };
        self.lock().entries.remove(&key).is_some()
    }

    /// Existence check without touching hit/miss counters.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        let Ok(key) = cache_key(username) else {
            return false;
        };
        let now = Instant::now();
        self.lock()
            .entries
            .get(&key)
            .is_some_and(|entry| entry.is_live(now))
    }

    /// Remove every expired entry. Returns how many were dropped.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    fn sweep_at(&self, now: Instant) -> usize {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|_, entry| entry.is_live(now));
        let dropped = before - inner.entries.len();
        inner.expirations += dropped as u64;
        dropped
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            entries: inner.entries.len(),
            hits: inner.hits,
            misses: inner.misses,
            expirations: inner.expirations,
        }
    }
}

/// Periodically sweep expired entries. The task runs until the runtime stops.
pub fn spawn_sweeper(cache: UserCache, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let dropped = cache.sweep();
            if dropped > 0 {
                tracing::debug!(dropped, "swept expired cache entries");
            }
        }
    })
}
