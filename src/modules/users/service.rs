use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::store::UserStore;
use crate::utils::errors::AppError;

/// User administration flows.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Grants administrator rights to the named user. The caller has already
    /// been checked for admin rights; `promoter_id` is only used for the
    /// audit log entry.
    #[instrument(skip(self))]
    pub async fn promote(&self, promoter_id: Uuid, username: &str) -> Result<(), AppError> {
        let mut target = self.store.by_username(username).await?;
        let promoter = self.store.by_id(promoter_id).await?;

        target.update_admin_status(true);
        self.store.save(&target).await?;

        info!(
            promoter = promoter.username(),
            promoted = target.username(),
            "user promoted to admin"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::User;
    use crate::store::InMemoryUserStore;
    use crate::utils::errors::ErrorKind;

    fn stored_user(username: &str, is_admin: bool) -> User {
        User::from_stored(Uuid::new_v4(), username.into(), "hash".into(), is_admin)
    }

    #[tokio::test]
    async fn promote_marks_the_target_as_admin() {
        let store = Arc::new(InMemoryUserStore::new());
        let admin = stored_user("alice", true);
        let target = stored_user("bob", false);
        store.save(&admin).await.unwrap();
        store.save(&target).await.unwrap();

        let service = UserService::new(store.clone());
        service.promote(admin.id(), "bob").await.unwrap();

        assert!(store.by_username("bob").await.unwrap().is_admin());
    }

    #[tokio::test]
    async fn promote_is_idempotent() {
        let store = Arc::new(InMemoryUserStore::new());
        let admin = stored_user("alice", true);
        store.save(&admin).await.unwrap();
        store.save(&stored_user("bob", false)).await.unwrap();

        let service = UserService::new(store.clone());
        service.promote(admin.id(), "bob").await.unwrap();
        service.promote(admin.id(), "bob").await.unwrap();

        assert!(store.by_username("bob").await.unwrap().is_admin());
    }

    #[tokio::test]
    async fn promote_unknown_user_is_not_found() {
        let store = Arc::new(InMemoryUserStore::new());
        let admin = stored_user("alice", true);
        store.save(&admin).await.unwrap();

        let service = UserService::new(store);
        let err = service.promote(admin.id(), "ghost").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
