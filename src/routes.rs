//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Service status
//! - `GET  /{short_code}`   - Short link redirect
//! - `/api/*`               - REST API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing slash normalization wraps the whole router in [`app_service`],
//! so it runs before routing.

use crate::api;
use crate::api::handlers::{redirect_handler, service_status_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_status_handler))
        .route("/{short_code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// The router as served: `/api/health/` and `/{short_code}/` resolve like
/// their slash-free forms.
pub fn app_service(state: AppState) -> Router {
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    Router::new().fallback_service(normalized)
}

