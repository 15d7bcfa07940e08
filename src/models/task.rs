use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Input structure for creating or updating a task.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The name of the task. Must not be empty.
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Relative importance; higher is more urgent. Defaults to 0.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub priority: i32,
}

/// Represents a task row as stored in the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub priority: i32,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the task is soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Task as returned by the API.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskResponse {
    pub id: i32,
    pub name: String,
    pub priority: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            priority: task.priority,
            user_id: task.user_id,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
