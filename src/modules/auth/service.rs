use std::sync::Arc;

use anyhow::anyhow;
use tracing::{debug, instrument, warn};

use crate::modules::users::model::User;
use crate::store::UserStore;
use crate::utils::errors::{AppError, ErrorKind};
use crate::utils::jwt::TokenService;
use crate::utils::password::PasswordHasher;

use super::model::AuthResult;

/// Registration and login flows.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Creates an account and returns it together with a fresh access token.
    /// The first account ever registered becomes an administrator.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<AuthResult, AppError> {
        let is_first_user = self.store.count().await? == 0;

        let user = User::create(username, password, is_first_user, &self.hasher)?;
        self.store.save(&user).await?;

        let token = self.tokens.generate(user.id(), user.is_admin())?;
        Ok(AuthResult::new(&user, token))
    }

    /// Verifies credentials and returns the account with a fresh access token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResult, AppError> {
        let user = match self.store.by_username(username).await {
            Ok(user) => user,
            Err(err) => {
                match err.kind() {
                    ErrorKind::NotFound => debug!("login attempt for unknown username"),
                    _ => warn!(error = %err.message(), "user lookup failed during login"),
                }
                return Err(invalid_credentials());
            }
        };

        if !self.hasher.verify(password, user.password_hash())? {
            return Err(invalid_credentials());
        }

        let token = self.tokens.generate(user.id(), user.is_admin())?;
        Ok(AuthResult::new(&user, token))
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(anyhow!("invalid username or password"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::jwt::JwtConfig;
    use crate::store::InMemoryUserStore;

    const STRONG_PASSWORD: &str = "correct-horse-battery-staple";

    fn service() -> (Arc<InMemoryUserStore>, AuthService) {
        let store = Arc::new(InMemoryUserStore::new());
        let config = JwtConfig {
            secret: "test-secret".to_string(),
            issuer: "taskgrid".to_string(),
            expiry_secs: 3600,
        };
        let service = AuthService::new(
            store.clone(),
            PasswordHasher::new(),
            TokenService::new(&config),
        );
        (store, service)
    }

    #[tokio::test]
    async fn first_registered_user_is_admin() {
        let (_, service) = service();

        let alice = service.register("alice", STRONG_PASSWORD).await.unwrap();
        let bob = service.register("bob", STRONG_PASSWORD).await.unwrap();

        assert!(alice.is_admin);
        assert!(!bob.is_admin);
    }

    #[tokio::test]
    async fn register_persists_the_user() {
        let (store, service) = service();

        let result = service.register("alice", STRONG_PASSWORD).await.unwrap();

        let stored = store.by_username("alice").await.unwrap();
        assert_eq!(stored.id(), result.id);
        assert!(stored.is_admin());
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let (_, service) = service();
        service.register("alice", STRONG_PASSWORD).await.unwrap();

        let err = service
            .register("alice", STRONG_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn login_returns_token_for_valid_credentials() {
        let (_, service) = service();
        let registered = service.register("alice", STRONG_PASSWORD).await.unwrap();

        let logged_in = service.login("alice", STRONG_PASSWORD).await.unwrap();

        assert_eq!(logged_in.id, registered.id);
        assert!(!logged_in.token.is_empty());
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let (_, service) = service();
        service.register("alice", STRONG_PASSWORD).await.unwrap();

        let unknown_user = service.login("mallory", STRONG_PASSWORD).await.unwrap_err();
        let wrong_password = service
            .login("alice", "wrong-but-long-enough")
            .await
            .unwrap_err();

        assert_eq!(unknown_user.kind(), ErrorKind::Unauthorized);
        assert_eq!(wrong_password.kind(), ErrorKind::Unauthorized);
        assert_eq!(unknown_user.message(), wrong_password.message());
    }
}
