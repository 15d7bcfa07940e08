pub mod admin;
pub mod auth;
pub mod health;
pub mod projects;
pub mod tasks;
pub mod users;

use actix_web::web;
use validator::ValidationErrors;

use crate::auth::AuthMiddleware;
use crate::error::AppError;

/// Registers every route. Repositories and `JwtKeys` must already be app data
/// (see `AppState::register`).
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health)
        .service(users::create_user)
        .service(auth::login)
        .service(
            web::scope("/users")
                .wrap(AuthMiddleware)
                .service(users::get_me)
                .service(users::update_me)
                .service(users::delete_me),
        )
        .service(
            web::scope("/admin")
                .wrap(AuthMiddleware)
                .service(admin::list_users),
        )
        .service(
            web::scope("/todo/tasks")
                .wrap(AuthMiddleware)
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        )
        .service(
            web::scope("/projects")
                .wrap(AuthMiddleware)
                .service(projects::get_projects)
                .service(projects::create_project)
                .service(projects::get_project)
                .service(projects::update_project)
                .service(projects::delete_project),
        );
}

/// Unparseable bodies get the same envelope as every other 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("invalid request body: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("invalid path parameter: {}", err)).into()
    })
}

/// Turns validation failures into a 400 with a fixed, resource-specific message.
pub(crate) fn invalid_input(message: &'static str) -> impl FnOnce(ValidationErrors) -> AppError {
    move |errors| {
        log::debug!("{}: {}", message, errors);
        AppError::BadRequest(message.to_string())
    }
}
