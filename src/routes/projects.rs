use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{ProjectInput, ProjectResponse},
    repository::ProjectRepository,
    response::ApiResponse,
    routes::invalid_input,
};
use actix_web::{delete, get, http::StatusCode, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

const INVALID_PROJECT: &str = "error in input project";

#[get("")]
pub async fn get_projects(
    repo: web::Data<dyn ProjectRepository>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let projects: Vec<ProjectResponse> = repo
        .list_by_user(user.0)
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(ApiResponse::respond(StatusCode::OK, "success to get all project", projects))
}

#[post("")]
pub async fn create_project(
    repo: web::Data<dyn ProjectRepository>,
    user: AuthenticatedUser,
    project_data: web::Json<ProjectInput>,
) -> Result<HttpResponse, AppError> {
    project_data
        .validate()
        .map_err(invalid_input(INVALID_PROJECT))?;

    let project = repo.create(user.0, &project_data).await?;

    Ok(ApiResponse::respond(
        StatusCode::CREATED,
        "success to create project",
        ProjectResponse::from(project),
    ))
}

#[get("/{id}")]
pub async fn get_project(
    repo: web::Data<dyn ProjectRepository>,
    user: AuthenticatedUser,
    project_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let project = repo.find(project_id.into_inner(), user.0).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success to get project",
        ProjectResponse::from(project),
    ))
}

/// Renames a project the caller owns; foreign or deleted projects are 404.
#[put("/{id}")]
pub async fn update_project(
    repo: web::Data<dyn ProjectRepository>,
    user: AuthenticatedUser,
    project_id: web::Path<i32>,
    project_data: web::Json<ProjectInput>,
) -> Result<HttpResponse, AppError> {
    project_data
        .validate()
        .map_err(invalid_input(INVALID_PROJECT))?;

    let project = repo
        .update(project_id.into_inner(), user.0, &project_data)
        .await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success to update project",
        ProjectResponse::from(project),
    ))
}

#[delete("/{id}")]
pub async fn delete_project(
    repo: web::Data<dyn ProjectRepository>,
    user: AuthenticatedUser,
    project_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let deleted_at = repo.soft_delete(project_id.into_inner(), user.0).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success to delete project",
        json!({ "deleted_at": deleted_at }),
    ))
}
