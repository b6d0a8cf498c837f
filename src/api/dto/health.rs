//! DTOs for health check endpoints.

use serde::Serialize;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceStatusResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
