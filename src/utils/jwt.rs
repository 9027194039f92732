use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Issues and validates the HS256 access tokens carried by the
/// `accessToken` cookie.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiry_secs: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            expiry_secs: config.expiry_secs,
        }
    }

    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }

    pub fn generate(&self, user_id: Uuid, is_admin: bool) -> Result<String, AppError> {
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            is_admin,
            iss: self.issuer.clone(),
            iat: now,
            exp: now + self.expiry_secs as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow!("failed to create token: {}", e)))
    }

    /// Decodes and verifies a token. Only HMAC-SHA-256 signatures are
    /// accepted; every failure collapses into the same unauthorized error so
    /// callers cannot tell a bad signature from an expired token.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "access token rejected");
            AppError::unauthorized(anyhow!("invalid or expired token"))
        })
    }
}
