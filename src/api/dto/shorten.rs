//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

pub const URL_NOT_PROVIDED: &str = "URL not provided";
pub const ALREADY_SHORTENED: &str = "URL already shortened and click count incremented";

/// Request to shorten a single URL.
///
/// Unknown fields are ignored, so `{"not_url": "..."}` is reported as a
/// missing URL rather than a malformed body.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(required(message = "URL not provided"))]
    pub url: Option<String>,
}

impl ShortenRequest {
    /// Reads the request from a parsed JSON body.
    ///
    /// A body that is not a JSON object (`null`, `[]`, `"x"`) carries no
    /// `url` field and is reported as such. An object whose `url` is not a
    /// string is a malformed body.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::bad_request(URL_NOT_PROVIDED));
        }

        serde_json::from_value(body)
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {e}")))
    }
}

/// Successful shorten response.
///
/// `message` is present only when the URL had been shortened before.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub status: &'static str,
    pub short_code: String,
    pub short_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}
