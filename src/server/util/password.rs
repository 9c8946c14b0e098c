//! Password hashing and verification.
//!
//! Passwords are stored as hex-encoded SHA-256 digests of the password
//! concatenated with a per-user random salt. Verification recomputes the
//! digest with the stored salt and compares.

use rand::Rng;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;
const GENERATED_PASSWORD_LEN: usize = 20;

const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random hex-encoded salt.
pub fn generate_salt() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; SALT_LEN] = rng.random();
    hex::encode(bytes)
}

/// Generates a random alphanumeric password for bootstrap accounts.
pub fn generate_password() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

/// Hashes a password with the given salt.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verifies a password against a stored hash and salt.
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    hash_password(password, salt) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_for_same_salt() {
        let salt = "abcd1234";
        assert_eq!(
            hash_password("hunter2", salt),
            hash_password("hunter2", salt)
        );
    }

    #[test]
    fn different_salts_produce_different_hashes() {
        assert_ne!(
            hash_password("hunter2", "salt-one"),
            hash_password("hunter2", "salt-two")
        );
    }

    #[test]
    fn verify_accepts_correct_password() {
        let salt = generate_salt();
        let hash = hash_password("correct horse", &salt);
        assert!(verify_password("correct horse", &salt, &hash));
        assert!(!verify_password("wrong horse", &salt, &hash));
    }

    #[test]
    fn generated_password_has_expected_length() {
        assert_eq!(generate_password().len(), GENERATED_PASSWORD_LEN);
    }
}
