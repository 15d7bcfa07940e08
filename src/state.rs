//! Shared application data registered on every worker.

use std::sync::Arc;

use actix_web::web;
use sqlx::PgPool;

use crate::auth::JwtKeys;
use crate::repository::{
    PgProjectRepository, PgTaskRepository, PgUserRepository, ProjectRepository, TaskRepository,
    UserRepository,
};

/// Repositories and JWT keys, each wrapped as `web::Data` so handlers can
/// extract them individually.
#[derive(Clone)]
pub struct AppState {
    pub users: web::Data<dyn UserRepository>,
    pub tasks: web::Data<dyn TaskRepository>,
    pub projects: web::Data<dyn ProjectRepository>,
    pub jwt: web::Data<JwtKeys>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
        jwt: JwtKeys,
    ) -> Self {
        Self {
            users: web::Data::from(users),
            tasks: web::Data::from(tasks),
            projects: web::Data::from(projects),
            jwt: web::Data::new(jwt),
        }
    }

    /// PostgreSQL-backed state sharing one pool across all repositories.
    pub fn postgres(pool: PgPool, jwt: JwtKeys) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgTaskRepository::new(pool.clone())),
            Arc::new(PgProjectRepository::new(pool)),
            jwt,
        )
    }

    /// Registers every item as app data. Use with `App::configure`.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.tasks.clone())
            .app_data(self.projects.clone())
            .app_data(self.jwt.clone());
    }
}
