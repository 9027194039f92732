//! Persistence interface for user accounts.
//!
//! Services talk to [`UserStore`] only; [`PgUserStore`] backs the running
//! server while [`InMemoryUserStore`] backs the test suite and local
//! experiments.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// Storage operations the auth and user services rely on.
///
/// `save` is an upsert keyed on the user id: registration inserts and
/// promotion updates go through the same call. Duplicate usernames surface
/// as `Conflict`, lookups that find nothing as `NotFound`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), AppError>;
    async fn by_id(&self, id: Uuid) -> Result<User, AppError>;
    async fn by_username(&self, username: &str) -> Result<User, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}
