use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{TaskInput, TaskResponse},
    repository::TaskRepository,
    response::ApiResponse,
    routes::invalid_input,
};
use actix_web::{delete, get, http::StatusCode, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

const INVALID_TASK: &str = "error in input task";

/// Retrieves the authenticated user's tasks.
///
/// ## Responses:
/// - `200 OK`: envelope whose `data` is an array of tasks, oldest first.
/// - `401 Unauthorized`: missing or invalid token.
/// - `500 Internal Server Error`: storage failure.
#[get("")]
pub async fn get_tasks(
    repo: web::Data<dyn TaskRepository>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let tasks: Vec<TaskResponse> = repo
        .list_by_user(user.0)
        .await?
        .into_iter()
        .map(TaskResponse::from)
        .collect();

    Ok(ApiResponse::respond(StatusCode::OK, "success to get all task", tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Request Body:
/// - `name`: required, non-empty.
/// - `priority` (optional): non-negative integer, defaults to 0.
///
/// ## Responses:
/// - `201 Created`: the new task.
/// - `400 Bad Request`: unparseable body, empty name, or negative priority.
/// - `401 Unauthorized`: missing or invalid token.
/// - `500 Internal Server Error`: storage failure.
#[post("")]
pub async fn create_task(
    repo: web::Data<dyn TaskRepository>,
    user: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<HttpResponse, AppError> {
    task_data.validate().map_err(invalid_input(INVALID_TASK))?;

    let task = repo.create(user.0, &task_data).await?;

    Ok(ApiResponse::respond(
        StatusCode::CREATED,
        "success to create task",
        TaskResponse::from(task),
    ))
}

/// Retrieves one task. Tasks of other users are reported as not found.
#[get("/{id}")]
pub async fn get_task(
    repo: web::Data<dyn TaskRepository>,
    user: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let task = repo.find(task_id.into_inner(), user.0).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success to get task",
        TaskResponse::from(task),
    ))
}

/// Replaces name and priority of a task the caller owns.
///
/// ## Responses:
/// - `200 OK`: the updated task.
/// - `400 Bad Request`: invalid body or non-numeric id.
/// - `404 Not Found`: no such live task for this user.
#[put("/{id}")]
pub async fn update_task(
    repo: web::Data<dyn TaskRepository>,
    user: AuthenticatedUser,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskInput>,
) -> Result<HttpResponse, AppError> {
    task_data.validate().map_err(invalid_input(INVALID_TASK))?;

    let task = repo.update(task_id.into_inner(), user.0, &task_data).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success to update task",
        TaskResponse::from(task),
    ))
}

/// Soft-deletes a task the caller owns.
#[delete("/{id}")]
pub async fn delete_task(
    repo: web::Data<dyn TaskRepository>,
    user: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let deleted_at = repo.soft_delete(task_id.into_inner(), user.0).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success to delete task",
        json!({ "deleted_at": deleted_at }),
    ))
}
