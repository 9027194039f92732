use anyhow::anyhow;
use data_encoding::BASE64;
use pbkdf2::pbkdf2_hmac;
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

use crate::utils::errors::AppError;

const ITERATIONS: u32 = 10_000;
const SALT_SIZE: usize = 16;
const KEY_SIZE: usize = 32;

/// PBKDF2-SHA-256 password hashing service. Stored values are the standard
/// base64 encoding of `salt || derived_key`.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
    salt_size: usize,
    key_size: usize,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            salt_size: SALT_SIZE,
            key_size: KEY_SIZE,
        }
    }
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a password under a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let mut salt = vec![0u8; self.salt_size];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| AppError::internal(anyhow!("failed to generate salt: {}", e)))?;

        let key = self.derive(password, &salt);

        let mut stored = salt;
        stored.extend_from_slice(&key);
        Ok(BASE64.encode(&stored))
    }

    /// Checks a password against a stored hash. `Ok(false)` means the
    /// password does not match; errors are reserved for malformed input.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let decoded = BASE64
            .decode(stored.as_bytes())
            .map_err(|e| AppError::internal(anyhow!("malformed password hash: {}", e)))?;

        if decoded.len() != self.salt_size + self.key_size {
            return Err(AppError::internal(anyhow!(
                "malformed password hash: unexpected length"
            )));
        }

        let (salt, expected) = decoded.split_at(self.salt_size);
        let key = self.derive(password, salt);

        Ok(constant_time_eq(expected, &key))
    }

    fn derive(&self, password: &str, salt: &[u8]) -> Vec<u8> {
        let mut key = vec![0u8; self.key_size];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, self.iterations, &mut key);
        key
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
