#![doc = "The `taskboard` library crate."]
#![doc = ""]
#![doc = "REST backend for users, tasks and projects. Contains the domain models, the"]
#![doc = "repository layer, JWT authentication, routing configuration and error handling."]
#![doc = "The binary (`main.rs`) only loads configuration and starts the server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;
