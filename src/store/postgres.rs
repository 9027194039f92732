use anyhow::{Context, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::UserStore;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// PostgreSQL-backed [`UserStore`]. Username uniqueness is enforced by the
/// `users_username_key` constraint rather than a read-before-write.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    is_admin: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_stored(row.id, row.username, row.password_hash, row.is_admin)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn save(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO users (id, username, password_hash, is_admin)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE
             SET username = EXCLUDED.username,
                 password_hash = EXCLUDED.password_hash,
                 is_admin = EXCLUDED.is_admin,
                 updated_at = NOW()",
        )
        .bind(user.id())
        .bind(user.username())
        .bind(user.password_hash())
        .bind(user.is_admin())
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(anyhow!("username already taken"))
            } else {
                AppError::internal(anyhow::Error::new(e).context("failed to save user"))
            }
        })
    }

    async fn by_id(&self, id: Uuid) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, is_admin FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch user by id")
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(anyhow!("user not found")))?;

        Ok(row.into())
    }

    async fn by_username(&self, username: &str) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, is_admin FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch user by username")
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(anyhow!("user not found")))?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .context("failed to count users")
            .map_err(AppError::internal)?;

        Ok(count)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
