use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention.
    pub sub: String,
    pub is_admin: bool,
    pub iss: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    /// Parses the subject back into the user id it was issued for.
    pub fn subject_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::unauthorized(anyhow!("invalid subject in token")))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Outcome of a successful registration or login. The token travels in the
/// `accessToken` cookie; the rest becomes the response body.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub token: String,
}

impl AuthResult {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            is_admin: user.is_admin(),
            token,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl From<&AuthResult> for AuthResponse {
    fn from(result: &AuthResult) -> Self {
        Self {
            id: result.id,
            username: result.username.clone(),
            is_admin: result.is_admin,
        }
    }
}
