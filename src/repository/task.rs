use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{RepoError, RepoResult};
use crate::models::{Task, TaskInput};

const TASK_COLUMNS: &str = "id, name, priority, user_id, created_at, updated_at, deleted_at";

/// Owner-scoped access to the `tasks` table.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, user_id: i32, input: &TaskInput) -> RepoResult<Task>;

    /// All live tasks of `user_id`, oldest first.
    async fn list_by_user(&self, user_id: i32) -> RepoResult<Vec<Task>>;

    async fn find(&self, id: i32, user_id: i32) -> RepoResult<Task>;

    async fn update(&self, id: i32, user_id: i32, input: &TaskInput) -> RepoResult<Task>;

    async fn soft_delete(&self, id: i32, user_id: i32) -> RepoResult<DateTime<Utc>>;
}

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, user_id: i32, input: &TaskInput) -> RepoResult<Task> {
        let sql = format!(
            "INSERT INTO tasks (name, priority, user_id) VALUES ($1, $2, $3) RETURNING {}",
            TASK_COLUMNS
        );
        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(&input.name)
            .bind(input.priority)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(task)
    }

    async fn list_by_user(&self, user_id: i32) -> RepoResult<Vec<Task>> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE user_id = $1 AND deleted_at IS NULL ORDER BY id",
            TASK_COLUMNS
        );
        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn find(&self, id: i32, user_id: i32) -> RepoResult<Task> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL",
            TASK_COLUMNS
        );
        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: i32, user_id: i32, input: &TaskInput) -> RepoResult<Task> {
        // Ownership is part of the WHERE clause, so a foreign task updates zero rows.
        let sql = format!(
            "UPDATE tasks SET name = $1, priority = $2, updated_at = NOW() \
             WHERE id = $3 AND user_id = $4 AND deleted_at IS NULL RETURNING {}",
            TASK_COLUMNS
        );
        sqlx::query_as::<_, Task>(&sql)
            .bind(&input.name)
            .bind(input.priority)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn soft_delete(&self, id: i32, user_id: i32) -> RepoResult<DateTime<Utc>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE tasks SET deleted_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL RETURNING deleted_at",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepoError::NotFound)
    }
}
