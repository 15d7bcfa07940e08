//!
//! # Response Envelope
//!
//! Every response body produced by the API, successful or not, is wrapped in
//! the same `{code, message, data}` shape. `code` mirrors the HTTP status so
//! clients that only look at the body still see the outcome.

use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// The JSON envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response.
    pub code: u16,
    /// Human-readable outcome, e.g. `"success to create task"`.
    pub message: String,
    /// Payload, `null` for errors and for operations without a result.
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    /// Builds an `HttpResponse` with `status` carrying `data` in the envelope.
    pub fn respond(status: StatusCode, message: impl Into<String>, data: T) -> HttpResponse {
        HttpResponse::build(status).json(Self::new(status, message, Some(data)))
    }
}

impl ApiResponse<()> {
    /// Builds an envelope with `data: null`.
    pub fn empty(status: StatusCode, message: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status).json(Self::new(status, message, None))
    }
}
