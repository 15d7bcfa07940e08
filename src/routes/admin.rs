use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::UserResponse,
    repository::UserRepository,
    response::ApiResponse,
};
use actix_web::{get, http::StatusCode, web, HttpResponse};

/// Lists every live user account.
#[get("/users")]
pub async fn list_users(
    repo: web::Data<dyn UserRepository>,
    _caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = repo
        .list()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(ApiResponse::respond(StatusCode::OK, "Success Get All User", users))
}
