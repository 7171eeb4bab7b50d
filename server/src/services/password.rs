//! Password hashing with bcrypt.
//!
//! Hashing is CPU-bound, so the async wrappers move work onto tokio's
//! blocking pool.

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("password worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Hash `password` with the given bcrypt cost.
///
/// # Errors
///
/// Returns an error if bcrypt rejects the cost or input.
pub fn hash(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Compare `password` against a stored bcrypt hash.
///
/// Malformed hashes count as a mismatch.
#[must_use]
pub fn verify(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// [`hash`] on the blocking pool.
///
/// # Errors
///
/// Returns an error if hashing fails or the worker panics.
pub async fn hash_async(password: String, cost: u32) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash(&password, cost)).await?
}

/// [`verify`] on the blocking pool.
///
/// # Errors
///
/// Returns an error only if the worker panics.
pub async fn verify_async(password: String, hash: String) -> Result<bool, PasswordError> {
    Ok(tokio::task::spawn_blocking(move || verify(&password, &hash)).await?)
}
