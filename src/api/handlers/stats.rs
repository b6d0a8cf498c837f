//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{short_code}`
///
/// # Response
///
/// ```json
/// { "url": "https://example.com", "clicks": 3, "created_at": "2024-01-01T12:00:00Z" }
/// ```
///
/// Reading statistics does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&short_code)?;

    Ok(Json(StatsResponse::from(link)))
}
