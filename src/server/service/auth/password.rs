//! Argon2id password hashing, run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::auth::AuthError;

/// Hashes `password` into a PHC string.
///
/// # Returns
/// - `Ok(String)` - Argon2id PHC string with a random salt
/// - `Err(AuthError::PasswordHash)` - Hashing failed or the blocking task panicked
pub async fn hash_password(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
    })
    .await
    .map_err(|e| AuthError::PasswordHash(format!("hash task failed: {e}")))?
    .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Checks `password` against a stored PHC string.
///
/// A stored value that is not a valid PHC string never verifies.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the stored hash is unreadable
/// - `Err(AuthError::PasswordHash)` - The blocking task panicked
pub async fn verify_password(password: String, stored_hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&stored_hash) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| AuthError::PasswordHash(format!("verify task failed: {e}")))
}
