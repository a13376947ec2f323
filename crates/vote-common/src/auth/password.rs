//! Password hashing
//!
//! Argon2id PHC strings with a random per-password salt. Plaintext passwords
//! are never stored or logged.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Check a password against a stored hash
///
/// `Ok(false)` means the password is wrong; `Err` means the stored hash is unreadable.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored password hash is malformed: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Stands in for the stored hash of an account that does not exist
static ABSENT_ACCOUNT_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("absent-account-placeholder").ok());

/// Check a password against a stored hash that may be missing
///
/// A missing hash still costs one full Argon2 verification, so a lookup miss
/// takes as long as a wrong password. Always `Ok(false)` when `stored_hash` is `None`.
pub fn verify_password_or_absent(
    password: &str,
    stored_hash: Option<&str>,
) -> Result<bool, AppError> {
    match stored_hash {
        Some(hash) => verify_password(password, hash),
        None => {
            if let Some(placeholder) = ABSENT_ACCOUNT_HASH.as_deref() {
                let _ = verify_password(password, placeholder);
            }
            Ok(false)
        }
    }
}
