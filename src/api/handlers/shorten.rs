//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::shorten::{ALREADY_SHORTENED, ShortenRequest, ShortenResponse, URL_NOT_PROVIDED};
use crate::domain::entities::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::public_base_url;

/// Creates a short URL for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// **201 Created** for a new link:
///
/// ```json
/// { "status": "ok", "short_code": "aB3dE9", "short_url": "http://localhost:5000/aB3dE9" }
/// ```
///
/// **200 OK** if the URL was already shortened. The existing link's click
/// count is incremented and `message` is added.
///
/// # Errors
///
/// - 400 Bad Request if `url` is missing (including non-object bodies) or
///   not a valid URL
/// - 415 Unsupported Media Type if the body is not JSON
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(body) = payload?;
    let payload = ShortenRequest::from_body(body)?;
    payload.validate()?;

    let long_url = payload
        .url
        .ok_or_else(|| AppError::bad_request(URL_NOT_PROVIDED))?;

    let outcome = state.link_service.shorten(&long_url)?;

    let (status, message) = match &outcome {
        ShortenOutcome::Created(_) => (StatusCode::CREATED, None),
        ShortenOutcome::Existing(_) => (StatusCode::OK, Some(ALREADY_SHORTENED)),
    };

    let base_url = public_base_url(state.base_url.as_deref(), &headers, &state.listen_addr);
    let link = outcome.into_link();
    let short_url = state.link_service.get_short_url(&base_url, &link.code);

    Ok((
        status,
        Json(ShortenResponse {
            status: "ok",
            short_code: link.code,
            short_url,
            message,
        }),
    ))
}
