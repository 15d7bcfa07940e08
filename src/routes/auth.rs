use crate::{
    auth::{verify_dummy_password, verify_password, AuthResponse, JwtKeys, LoginRequest},
    error::AppError,
    repository::{RepoError, UserRepository},
    response::ApiResponse,
    routes::invalid_input,
};
use actix_web::{http::StatusCode, post, web, HttpResponse};
use validator::Validate;

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Login user
///
/// Authenticates a user by email and password and returns a JWT.
/// Unknown emails and wrong passwords are indistinguishable to the caller.
#[post("/login")]
pub async fn login(
    repo: web::Data<dyn UserRepository>,
    keys: web::Data<JwtKeys>,
    login_data: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    login_data
        .validate()
        .map_err(invalid_input("error in request Login"))?;

    let user = match repo.find_by_email(&login_data.email).await {
        Ok(user) => user,
        Err(RepoError::NotFound) => {
            log::warn!("login attempt for unknown email");
            verify_dummy_password(&login_data.password);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
        Err(e) => return Err(e.into()),
    };

    if !verify_password(&login_data.password, &user.password_hash)? {
        log::warn!("wrong password for user {}", user.id);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let token = keys.generate_token(user.id)?;

    Ok(ApiResponse::respond(
        StatusCode::OK,
        "success login",
        AuthResponse {
            token,
            user_id: user.id,
        },
    ))
}
