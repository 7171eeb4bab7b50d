//! Bearer token issuing and validation (JWT, HS256).
//!
//! ARCHITECTURE
//! ============
//! Tokens are stateless: the username lives in the claims and nothing is
//! stored server-side. Logout is therefore a client-only operation and a
//! token stays valid until `exp`.

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;

use std::fmt::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const ISSUER: &str = "bcr-auth";

/// JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub iat: u64,
    pub exp: u64,
    pub iss: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid(err.to_string()),
        }
    }
}

/// Issues and validates tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl TokenManager {
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self { encoding: EncodingKey::from_secret(secret), decoding: DecodingKey::from_secret(secret), ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `username`, valid for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, unix_now())
    }

    fn issue_at(&self, username: &str, now: u64) -> Result<String, TokenError> {
        let claims = Claims {
            username: username.to_owned(),
            iat: now,
            exp: now.saturating_add(self.ttl.as_secs()),
            iss: ISSUER.to_owned(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate signature, algorithm, issuer, and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] past `exp`, [`TokenError::Invalid`] otherwise.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)?;
        if data.claims.username.is_empty() {
            return Err(TokenError::Invalid("empty username claim".to_owned()));
        }
        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Generate a random 32-byte hex secret for processes started without `JWT_SECRET`.
#[must_use]
pub fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}
