#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::header,
    test, App,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use taskboard::{
    auth::{AuthResponse, JwtKeys},
    models::{NewUser, Project, ProjectInput, Task, TaskInput, User},
    repository::{ProjectRepository, RepoError, RepoResult, TaskRepository, UserRepository},
    response::ApiResponse,
    routes, AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_keys() -> JwtKeys {
    JwtKeys::new(TEST_SECRET, 1)
}

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|u| u.deleted_at.is_none() && u.email == new_user.email)
        {
            return Err(RepoError::Duplicate("email".into()));
        }
        let now = Utc::now();
        let user = User {
            id: rows.len() as i32 + 1,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<User> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<User> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|u| u.email == email && u.deleted_at.is_none())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|u| u.deleted_at.is_none()).cloned().collect())
    }

    async fn update(&self, id: i32, user: &NewUser) -> RepoResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|u| u.id != id && u.deleted_at.is_none() && u.email == user.email)
        {
            return Err(RepoError::Duplicate("email".into()));
        }
        let row = rows
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or(RepoError::NotFound)?;
        row.name = user.name.clone();
        row.email = user.email.clone();
        row.password_hash = user.password_hash.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: i32) -> RepoResult<DateTime<Utc>> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or(RepoError::NotFound)?;
        let now = Utc::now();
        row.deleted_at = Some(now);
        Ok(now)
    }
}

#[derive(Default)]
pub struct InMemoryTasks {
    rows: Mutex<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for InMemoryTasks {
    async fn create(&self, user_id: i32, input: &TaskInput) -> RepoResult<Task> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let task = Task {
            id: rows.len() as i32 + 1,
            name: input.name.clone(),
            priority: input.priority,
            user_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(task.clone());
        Ok(task)
    }

    async fn list_by_user(&self, user_id: i32) -> RepoResult<Vec<Task>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|t| t.user_id == user_id && t.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find(&self, id: i32, user_id: i32) -> RepoResult<Task> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|t| t.id == id && t.user_id == user_id && t.deleted_at.is_none())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: i32, user_id: i32, input: &TaskInput) -> RepoResult<Task> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id && t.deleted_at.is_none())
            .ok_or(RepoError::NotFound)?;
        row.name = input.name.clone();
        row.priority = input.priority;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: i32, user_id: i32) -> RepoResult<DateTime<Utc>> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id && t.deleted_at.is_none())
            .ok_or(RepoError::NotFound)?;
        let now = Utc::now();
        row.deleted_at = Some(now);
        Ok(now)
    }
}

#[derive(Default)]
pub struct InMemoryProjects {
    rows: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create(&self, user_id: i32, input: &ProjectInput) -> RepoResult<Project> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let project = Project {
            id: rows.len() as i32 + 1,
            name: input.name.clone(),
            user_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(project.clone());
        Ok(project)
    }

    async fn list_by_user(&self, user_id: i32) -> RepoResult<Vec<Project>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|p| p.user_id == user_id && p.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find(&self, id: i32, user_id: i32) -> RepoResult<Project> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|p| p.id == id && p.user_id == user_id && p.deleted_at.is_none())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: i32, user_id: i32, input: &ProjectInput) -> RepoResult<Project> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id && p.user_id == user_id && p.deleted_at.is_none())
            .ok_or(RepoError::NotFound)?;
        row.name = input.name.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: i32, user_id: i32) -> RepoResult<DateTime<Utc>> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id && p.user_id == user_id && p.deleted_at.is_none())
            .ok_or(RepoError::NotFound)?;
        let now = Utc::now();
        row.deleted_at = Some(now);
        Ok(now)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingRepository;

fn unreachable_db<T>() -> RepoResult<T> {
    Err(RepoError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl UserRepository for FailingRepository {
    async fn create(&self, _new_user: &NewUser) -> RepoResult<User> {
        unreachable_db()
    }
    async fn find_by_id(&self, _id: i32) -> RepoResult<User> {
        unreachable_db()
    }
    async fn find_by_email(&self, _email: &str) -> RepoResult<User> {
        unreachable_db()
    }
    async fn list(&self) -> RepoResult<Vec<User>> {
        unreachable_db()
    }
    async fn update(&self, _id: i32, _user: &NewUser) -> RepoResult<User> {
        unreachable_db()
    }
    async fn soft_delete(&self, _id: i32) -> RepoResult<DateTime<Utc>> {
        unreachable_db()
    }
}

#[async_trait]
impl TaskRepository for FailingRepository {
    async fn create(&self, _user_id: i32, _input: &TaskInput) -> RepoResult<Task> {
        unreachable_db()
    }
    async fn list_by_user(&self, _user_id: i32) -> RepoResult<Vec<Task>> {
        unreachable_db()
    }
    async fn find(&self, _id: i32, _user_id: i32) -> RepoResult<Task> {
        unreachable_db()
    }
    async fn update(&self, _id: i32, _user_id: i32, _input: &TaskInput) -> RepoResult<Task> {
        unreachable_db()
    }
    async fn soft_delete(&self, _id: i32, _user_id: i32) -> RepoResult<DateTime<Utc>> {
        unreachable_db()
    }
}

#[async_trait]
impl ProjectRepository for FailingRepository {
    async fn create(&self, _user_id: i32, _input: &ProjectInput) -> RepoResult<Project> {
        unreachable_db()
    }
    async fn list_by_user(&self, _user_id: i32) -> RepoResult<Vec<Project>> {
        unreachable_db()
    }
    async fn find(&self, _id: i32, _user_id: i32) -> RepoResult<Project> {
        unreachable_db()
    }
    async fn update(
        &self,
        _id: i32,
        _user_id: i32,
        _input: &ProjectInput,
    ) -> RepoResult<Project> {
        unreachable_db()
    }
    async fn soft_delete(&self, _id: i32, _user_id: i32) -> RepoResult<DateTime<Utc>> {
        unreachable_db()
    }
}

pub fn memory_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryUsers::default()),
        Arc::new(InMemoryTasks::default()),
        Arc::new(InMemoryProjects::default()),
        test_keys(),
    )
}

pub fn failing_state() -> AppState {
    let failing = Arc::new(FailingRepository);
    AppState::new(failing.clone(), failing.clone(), failing, test_keys())
}

pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .configure(|cfg| state.register(cfg))
            .configure(routes::config),
    )
    .await
}

pub struct TestUser {
    pub id: i32,
    pub token: String,
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn read_envelope<B: MessageBody>(resp: ServiceResponse<B>) -> ApiResponse<Value> {
    test::read_body_json(resp).await
}

pub async fn register_and_login(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    name: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": name, "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "registration of {} failed", email);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 200, "login of {} failed", email);

    let envelope: ApiResponse<AuthResponse> = test::read_body_json(resp).await;
    let auth = envelope.data.expect("login response carries a token");
    TestUser {
        id: auth.user_id,
        token: auth.token,
    }
}
