//! Handlers for health check endpoints.

use axum::Json;

use crate::api::dto::health::{HealthResponse, ServiceStatusResponse};

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "service": "URL Shortener API" }
/// ```
pub async fn service_status_handler() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        status: "healthy",
        service: "URL Shortener API",
    })
}

/// API liveness check.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// { "status": "ok", "message": "URL Shortener API is running" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
    })
}
