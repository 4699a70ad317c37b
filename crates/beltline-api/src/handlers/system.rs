//! Liveness endpoints

use axum::Json;

use crate::models::{HealthResponse, StatusResponse};

/// Root path - service status
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service status", body = StatusResponse)
    ),
    tag = "system"
)]
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "beltline".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
