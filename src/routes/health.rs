use actix_web::{get, http::StatusCode, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::response::ApiResponse;

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> HttpResponse {
    ApiResponse::respond(
        StatusCode::OK,
        "ok",
        json!({
            "status": "ok",
            "timestamp": Utc::now()
        }),
    )
}
