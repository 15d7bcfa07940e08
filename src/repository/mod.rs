//! Data access for users, tasks and projects.
//!
//! Each resource has an object-safe repository trait used by the HTTP handlers
//! and a PostgreSQL implementation. Handlers receive repositories as
//! `web::Data<dyn Trait>`, so tests can substitute in-memory versions.
//!
//! All queries ignore soft-deleted rows. Task and project queries are scoped
//! to the owning user; a row owned by someone else is reported as `NotFound`.

pub mod project;
pub mod task;
pub mod user;

use thiserror::Error;

pub use project::{PgProjectRepository, ProjectRepository};
pub use task::{PgTaskRepository, TaskRepository};
pub use user::{PgUserRepository, UserRepository};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,
    /// A unique constraint was violated; carries the offending field name.
    #[error("duplicate {0}")]
    Duplicate(String),
    #[error(transparent)]
    Database(sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepoError::Duplicate(duplicate_field(db.constraint()))
            }
            other => RepoError::Database(other),
        }
    }
}

// The only unique index in the schema is on `users.email`.
fn duplicate_field(constraint: Option<&str>) -> String {
    match constraint {
        Some(name) if name.contains("email") => "email".to_string(),
        Some(name) => name.to_string(),
        None => "record".to_string(),
    }
}
