use crate::{
    auth::{hash_password, AuthenticatedUser},
    error::AppError,
    models::{NewUser, UserInput, UserResponse},
    repository::{RepoError, UserRepository},
    response::ApiResponse,
    routes::invalid_input,
};
use actix_web::{delete, get, http::StatusCode, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

/// Validates the payload and hashes its password.
fn to_new_user(input: UserInput, on_invalid: &'static str) -> Result<NewUser, AppError> {
    input.validate().map_err(invalid_input(on_invalid))?;
    Ok(NewUser {
        password_hash: hash_password(&input.password)?,
        name: input.name,
        email: input.email,
    })
}

/// Register a new user
///
/// Public endpoint. Returns `201` with the created user. A duplicate email is a
/// `400`; any other storage failure is a `500`.
#[post("/users")]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    user_data: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
    let new_user = to_new_user(user_data.into_inner(), "error in request Create")?;

    let user = repo.create(&new_user).await.map_err(|e| match e {
        dup @ RepoError::Duplicate(_) => AppError::from(dup),
        other => {
            log::error!("failed to create user: {}", other);
            AppError::InternalServerError("error in access Create".into())
        }
    })?;

    log::info!("registered user {}", user.id);

    Ok(ApiResponse::respond(
        StatusCode::CREATED,
        "success create user",
        UserResponse::from(user),
    ))
}

/// Returns the authenticated user's own profile.
#[get("/me")]
pub async fn get_me(
    repo: web::Data<dyn UserRepository>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = repo.find_by_id(user.0).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "Success Get By Id",
        UserResponse::from(user),
    ))
}

/// Replaces name, email and password of the authenticated user.
#[put("/me")]
pub async fn update_me(
    repo: web::Data<dyn UserRepository>,
    user: AuthenticatedUser,
    user_data: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
    let changes = to_new_user(user_data.into_inner(), "error in request Update")?;
    let updated = repo.update(user.0, &changes).await?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "Success Update By Id",
        UserResponse::from(updated),
    ))
}

/// Soft-deletes the authenticated user. Their token stops resolving to an account.
#[delete("/me")]
pub async fn delete_me(
    repo: web::Data<dyn UserRepository>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let deleted_at = repo.soft_delete(user.0).await?;
    log::info!("soft-deleted user {}", user.0);

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "Success Delete By Id",
        json!({ "deleted_at": deleted_at }),
    ))
}
