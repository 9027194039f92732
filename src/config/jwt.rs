use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub expiry_secs: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "not-so-secret-change-in-production".to_string()),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "taskgrid".to_string()),
            expiry_secs: env::var("JWT_EXPIRATION_IN_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        }
    }
}
