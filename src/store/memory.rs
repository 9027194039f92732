use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserStore;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// In-memory [`UserStore`] used by the test suite and local experiments.
/// Username uniqueness is checked inside the same write lock as the insert,
/// mirroring what the database constraint gives the Postgres store.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|existing| existing.username() == user.username() && existing.id() != user.id());
        if taken {
            return Err(AppError::conflict(anyhow!("username already taken")));
        }

        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn by_id(&self, id: Uuid) -> Result<User, AppError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow!("user not found")))
    }

    async fn by_username(&self, username: &str) -> Result<User, AppError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username() == username)
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow!("user not found")))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.read().await.len() as i64)
    }
}
