//! Password Hashing
//!
//! Argon2id hashing and verification for the login flow. Hash comparison is
//! the only password operation the auth handlers perform; storage of the
//! hash belongs to the external user store.

use crate::error::AuthError;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id with a freshly generated salt
pub fn hash(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(hash)
}

/// Verify a password against a stored hash
///
/// A wrong password is `Ok(false)`. A stored hash that cannot be parsed is
/// an internal error: it means the store handed us corrupt data, not that
/// the caller guessed wrong.
pub fn verify(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|err| {
        tracing::error!("Stored password hash is malformed: {:?}", err);
        AuthError::Internal
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
