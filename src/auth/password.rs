// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! Secret hashing and verification.
//!
//! Secrets are stored as Argon2id PHC strings (salt and parameters embedded),
//! never as plaintext. Verification is the slow-hash comparison; a mismatch is
//! an `Ok(false)`, while a hash that cannot be parsed at all is an error: the
//! stored credential is corrupt and the caller should not treat that as a
//! normal failed login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash secret: {0}")]
    Hash(String),

    #[error("stored secret hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hash a secret with Argon2id and a fresh random salt.
///
/// Returns the PHC string form, e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`.
/// Two calls with the same input produce different strings; equality of
/// secrets is only decidable through [`verify_secret`].
pub fn hash_secret(secret: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a secret against a stored PHC string.
///
/// `Ok(false)` means the secret does not match; `Err` means the stored hash
/// itself is unusable.
pub fn verify_secret(secret: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

    match Argon2::default().verify_password(secret.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_matching_secret() {
        let hash = hash_secret("123").unwrap();
        assert!(verify_secret("123", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let hash = hash_secret("123").unwrap();
        assert!(!verify_secret("1234", &hash).unwrap());
        assert!(!verify_secret("", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_secret("123").unwrap();
        let b = hash_secret("123").unwrap();
        // Same secret, different salt, different PHC string.
        assert_ne!(a, b);
        assert!(verify_secret("123", &a).unwrap());
        assert!(verify_secret("123", &b).unwrap());
    }

    #[test]
    fn hash_is_a_phc_string_not_plaintext() {
        let hash = hash_secret("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter2"));
    }

    #[test]
    fn corrupt_stored_hash_is_an_error_not_a_mismatch() {
        assert!(matches!(
            verify_secret("123", "not-a-phc-string"),
            Err(PasswordError::MalformedHash(_))
        ));
    }
}
