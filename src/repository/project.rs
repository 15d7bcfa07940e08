use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{RepoError, RepoResult};
use crate::models::{Project, ProjectInput};

const PROJECT_COLUMNS: &str = "id, name, user_id, created_at, updated_at, deleted_at";

/// Owner-scoped access to the `projects` table.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, user_id: i32, input: &ProjectInput) -> RepoResult<Project>;

    async fn list_by_user(&self, user_id: i32) -> RepoResult<Vec<Project>>;

    async fn find(&self, id: i32, user_id: i32) -> RepoResult<Project>;

    async fn update(&self, id: i32, user_id: i32, input: &ProjectInput) -> RepoResult<Project>;

    async fn soft_delete(&self, id: i32, user_id: i32) -> RepoResult<DateTime<Utc>>;
}

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, user_id: i32, input: &ProjectInput) -> RepoResult<Project> {
        let sql = format!(
            "INSERT INTO projects (name, user_id) VALUES ($1, $2) RETURNING {}",
            PROJECT_COLUMNS
        );
        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(&input.name)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(project)
    }

    async fn list_by_user(&self, user_id: i32) -> RepoResult<Vec<Project>> {
        let sql = format!(
            "SELECT {} FROM projects WHERE user_id = $1 AND deleted_at IS NULL ORDER BY id",
            PROJECT_COLUMNS
        );
        let projects = sqlx::query_as::<_, Project>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }

    async fn find(&self, id: i32, user_id: i32) -> RepoResult<Project> {
        let sql = format!(
            "SELECT {} FROM projects WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL",
            PROJECT_COLUMNS
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: i32, user_id: i32, input: &ProjectInput) -> RepoResult<Project> {
        let sql = format!(
            "UPDATE projects SET name = $1, updated_at = NOW() \
             WHERE id = $2 AND user_id = $3 AND deleted_at IS NULL RETURNING {}",
            PROJECT_COLUMNS
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(&input.name)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn soft_delete(&self, id: i32, user_id: i32) -> RepoResult<DateTime<Utc>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE projects SET deleted_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL RETURNING deleted_at",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepoError::NotFound)
    }
}
