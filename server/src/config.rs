//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Every knob has a default so a bare `cargo run` boots a working dev server
//! backed by the in-memory user store. `main` loads `.env` via `dotenvy`
//! before calling [`ServerConfig::from_env`].

use std::time::Duration;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 8443;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 15 * 60;
pub const DEFAULT_BCRYPT_COST: u32 = 12;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_RATE_LIMIT_REQUESTS: usize = 100;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Bounds for every `*_SECS` duration knob: 1 second to 365 days.
const MIN_DURATION_SECS: u64 = 1;
const MAX_DURATION_SECS: u64 = 365 * 24 * 60 * 60;
const MAX_RATE_LIMIT_REQUESTS: u64 = 1_000_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("BCRYPT_COST must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {0}")]
    BcryptCost(u32),
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange { key: &'static str, value: u64, min: u64, max: u64 },
}

/// Typed runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` selects the in-memory user store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// `None` means a random per-process secret is generated at startup.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub cache_ttl: Duration,
    pub rate_limit_requests: usize,
    pub rate_limit_window: Duration,
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            jwt_secret: None,
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            rate_limit_requests: DEFAULT_RATE_LIMIT_REQUESTS,
            rate_limit_window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
            cors_origin: DEFAULT_CORS_ORIGIN.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Build the config from the process environment.
    ///
    /// Optional:
    /// - `PORT` (8443), `DATABASE_URL`, `DB_MAX_CONNECTIONS` (5)
    /// - `JWT_SECRET`, `TOKEN_TTL_SECS` (900), `BCRYPT_COST` (12)
    /// - `CACHE_TTL_SECS` (86400)
    /// - `RATE_LIMIT_REQUESTS` (100), `RATE_LIMIT_WINDOW_SECS` (60)
    /// - `CORS_ORIGIN` (`http://localhost:5173`)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed or is out
    /// of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value cannot be parsed, or if a duration
    /// or request limit falls outside its bounds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCost(bcrypt_cost));
        }

        let rate_limit_requests = parse_bounded(
            &lookup,
            "RATE_LIMIT_REQUESTS",
            DEFAULT_RATE_LIMIT_REQUESTS as u64,
            1,
            MAX_RATE_LIMIT_REQUESTS,
        )?;
        let rate_limit_requests =
            usize::try_from(rate_limit_requests).map_err(|_| ConfigError::OutOfRange {
                key: "RATE_LIMIT_REQUESTS",
                value: rate_limit_requests,
                min: 1,
                max: MAX_RATE_LIMIT_REQUESTS,
            })?;

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            database_url: non_empty("DATABASE_URL"),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            jwt_secret: non_empty("JWT_SECRET"),
            token_ttl: parse_secs(&lookup, "TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?,
            bcrypt_cost,
            cache_ttl: parse_secs(&lookup, "CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?,
            rate_limit_requests,
            rate_limit_window: parse_secs(&lookup, "RATE_LIMIT_WINDOW_SECS", DEFAULT_RATE_LIMIT_WINDOW_SECS)?,
            cors_origin: non_empty("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_bounded<F>(lookup: &F, key: &'static str, default: u64, min: u64, max: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange { key, value, min, max });
    }
    Ok(value)
}

fn parse_secs<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_bounded(lookup, key, default, MIN_DURATION_SECS, MAX_DURATION_SECS).map(Duration::from_secs)
}
