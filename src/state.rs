use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::modules::auth::service::AuthService;
use crate::modules::users::service::UserService;
use crate::store::{PgUserStore, UserStore};
use crate::utils::jwt::TokenService;
use crate::utils::password::PasswordHasher;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub users: UserService,
    pub tokens: TokenService,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Wires the services around any [`UserStore`] implementation. The test
    /// suite passes an in-memory store here.
    pub fn new(store: Arc<dyn UserStore>, jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        let tokens = TokenService::new(jwt_config);

        Self {
            auth: AuthService::new(store.clone(), PasswordHasher::new(), tokens.clone()),
            users: UserService::new(store),
            tokens,
            cors_config,
        }
    }
}

/// Builds the production state: Postgres-backed store with migrations applied.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store = Arc::new(PgUserStore::new(pool));
    Ok(AppState::new(
        store,
        &JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
