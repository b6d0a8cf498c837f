//! Link shortening, resolution and statistics service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{Link, ShortenOutcome};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_code;
use crate::utils::url_validator::is_valid_url;

pub const INVALID_URL_FORMAT: &str = "Invalid URL format";
pub const SHORT_CODE_NOT_FOUND: &str = "Short code not found";

/// Service for creating and resolving shortened links.
///
/// Validation happens here, before the repository is touched, so rejected
/// input never changes stored state.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Shortens `long_url`, reusing the existing code if it was shortened
    /// before.
    ///
    /// Reusing an existing link counts as a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` lacks a scheme or host.
    pub fn shorten(&self, long_url: &str) -> Result<ShortenOutcome, AppError> {
        if !is_valid_url(long_url) {
            return Err(AppError::bad_request(INVALID_URL_FORMAT));
        }

        let outcome = self.link_repository.get_or_create(long_url);

        match &outcome {
            ShortenOutcome::Created(link) => {
                info!(code = %link.code, "Created short link");
            }
            ShortenOutcome::Existing(link) => {
                debug!(code = %link.code, clicks = link.clicks, "Reused short link");
            }
        }

        Ok(outcome)
    }

    /// Resolves a code for redirection, counting the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_well_formed_code(code) {
            return Err(AppError::not_found(SHORT_CODE_NOT_FOUND));
        }

        self.link_repository
            .increment_clicks(code)
            .ok_or_else(|| AppError::not_found(SHORT_CODE_NOT_FOUND))
    }

    /// Returns a snapshot of the link for `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub fn get_stats(&self, code: &str) -> Result<Link, AppError> {
        if !is_well_formed_code(code) {
            return Err(AppError::not_found(SHORT_CODE_NOT_FOUND));
        }

        self.link_repository
            .find_by_code(code)
            .ok_or_else(|| AppError::not_found(SHORT_CODE_NOT_FOUND))
    }

    /// Number of stored links.
    pub fn link_count(&self) -> usize {
        self.link_repository.len()
    }

    /// Constructs the full short URL from a base address and code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
