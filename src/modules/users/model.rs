//! User aggregate and its invariants.
//!
//! [`User`] is the only place a password hash can be produced or a username
//! accepted: [`User::create`] runs the full validation pipeline, while
//! [`User::from_stored`] rehydrates a row the store already holds. Fields are
//! private so callers cannot bypass either path.

use anyhow::anyhow;
use uuid::Uuid;
use zxcvbn::{Score, zxcvbn};

use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;

const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 20;
const MIN_PASSWORD_STRENGTH: Score = Score::Three;

/// A registered account.
///
/// The admin flag is set at creation (first account bootstraps as admin) and
/// afterwards changes only through [`User::update_admin_status`], which the
/// promotion workflow drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    username: String,
    password_hash: String,
    is_admin: bool,
}

impl User {
    /// Creates a new account, validating the username and password and
    /// hashing the password through `hasher`.
    pub fn create(
        username: &str,
        password: &str,
        is_admin: bool,
        hasher: &PasswordHasher,
    ) -> Result<Self, AppError> {
        validate_username(username)?;
        validate_password_strength(password)?;

        let password_hash = hasher.hash(password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            is_admin,
        })
    }

    /// Rehydrates an account from values a store already validated.
    pub fn from_stored(id: Uuid, username: String, password_hash: String, is_admin: bool) -> Self {
        Self {
            id,
            username,
            password_hash,
            is_admin,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn update_admin_status(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
    }
}

fn validate_username(username: &str) -> Result<(), AppError> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(AppError::validation(anyhow!("username is too short")));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(AppError::validation(anyhow!("username is too long")));
    }
    if !username
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Err(AppError::validation(anyhow!(
            "username has an invalid format"
        )));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if zxcvbn(password, &[]).score() < MIN_PASSWORD_STRENGTH {
        return Err(AppError::validation(anyhow!("password is too weak")));
    }
    Ok(())
}
