//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Looking up the target and counting the click happen in one store
/// operation, so concurrent redirects never lose a click.
///
/// # Response
///
/// 302 Found with `Location` set to the stored long URL.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&short_code)?;
    debug!(code = %link.code, clicks = link.clicks, "Redirecting");

    let location = location_header(&link.long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value for `long_url`.
///
/// The stored string is used verbatim when it is a legal header value.
/// Otherwise (control characters the URL parser tolerates) its canonical
/// serialization is used.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return Ok(value);
    }

    Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored URL cannot be used as a redirect target"))
}
