use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{RepoError, RepoResult};
use crate::models::{NewUser, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at, deleted_at";

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: &NewUser) -> RepoResult<User>;

    async fn find_by_id(&self, id: i32) -> RepoResult<User>;

    /// Used by login; soft-deleted accounts are not found.
    async fn find_by_email(&self, email: &str) -> RepoResult<User>;

    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Replaces name, email and password hash. Bumps `updated_at`.
    async fn update(&self, id: i32, user: &NewUser) -> RepoResult<User>;

    /// Marks the user deleted and returns the deletion timestamp.
    async fn soft_delete(&self, id: i32) -> RepoResult<DateTime<Utc>>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        let sql = format!(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<User> {
        let sql = format!(
            "SELECT {} FROM users WHERE id = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<User> {
        let sql = format!(
            "SELECT {} FROM users WHERE email = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE deleted_at IS NULL ORDER BY id",
            USER_COLUMNS
        );
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn update(&self, id: i32, user: &NewUser) -> RepoResult<User> {
        let sql = format!(
            "UPDATE users SET name = $1, email = $2, password_hash = $3, updated_at = NOW() \
             WHERE id = $4 AND deleted_at IS NULL RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn soft_delete(&self, id: i32) -> RepoResult<DateTime<Utc>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE users SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL RETURNING deleted_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepoError::NotFound)
    }
}
