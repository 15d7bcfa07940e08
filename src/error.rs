//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! `AppError` implements `actix_web::error::ResponseError`, so returning it from a handler
//! produces the standard `{code, message, data}` envelope with the matching status code.
//!
//! Database failures are reported to the client with a generic message; the underlying
//! cause is logged instead.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::repository::RepoError;
use crate::response::ApiResponse;

/// Message sent to clients for any failure inside the data layer.
pub const DATABASE_ERROR_MESSAGE: &str = "error in database process";

/// Message sent to clients when a row is missing, deleted, or owned by someone else.
pub const NOT_FOUND_MESSAGE: &str = "record not found";

/// Represents all possible errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or invalid request (HTTP 400).
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// Authentication failed or is missing (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The requested resource does not exist for the caller (HTTP 404).
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Unexpected server-side error (HTTP 500).
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
    /// Error originating from the repository layer (HTTP 500).
    /// The detail is kept for logs only.
    #[error("Database Error: {0}")]
    DatabaseError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg) => msg.as_str(),
            AppError::DatabaseError(detail) => {
                log::error!("database failure: {}", detail);
                DATABASE_ERROR_MESSAGE
            }
        };
        ApiResponse::empty(self.status_code(), message)
    }
}

/// `NotFound` keeps its meaning, duplicates are a client mistake,
/// everything else is an opaque database failure.
impl From<RepoError> for AppError {
    fn from(error: RepoError) -> AppError {
        match error {
            RepoError::NotFound => AppError::NotFound(NOT_FOUND_MESSAGE.into()),
            RepoError::Duplicate(what) => AppError::BadRequest(format!("{} already registered", what)),
            RepoError::Database(e) => AppError::DatabaseError(e.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(format!("Invalid token: {}", error))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
