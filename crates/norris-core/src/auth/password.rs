//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id and stored as PHC strings (which embed
//! the salt and parameters), so verification needs nothing but the stored
//! hash.
//!
//! # Security Note
//!
//! Error messages from this module never contain the password or the hash.

use crate::error::{NorrisError, Result};
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns an `Internal` error if hashing fails; the message carries no
/// secret material.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| NorrisError::internal(format!("password hashing failed: {}", e)))
}

/// Verifies a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` for a wrong password; an `Err` only signals a
/// malformed stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| NorrisError::internal(format!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
