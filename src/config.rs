//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `BASE_URL` - Public base for generated short URLs, e.g. `https://sho.rt`.
//!   When unset, the request's `Host` header is used.
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! There is nothing to configure for storage: links live in process memory
//! and are lost on restart.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

use crate::utils::url_validator::is_valid_url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL for short links, without a trailing slash.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults. Call [`Config::validate`] to check the values.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let base_url = Self::load_base_url();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
        }
    }

    /// Loads `BASE_URL`, treating an empty value as unset.
    fn load_base_url() -> Option<String> {
        let url = env::var("BASE_URL").ok()?;
        let url = url.trim().trim_end_matches('/');

        if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a `host:port` socket address
    /// - `base_url` is set but is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base_url) = self.base_url
            && (!(base_url.starts_with("http://") || base_url.starts_with("https://"))
                || !is_valid_url(base_url))
        {
            anyhow::bail!(
                "BASE_URL must be an absolute 'http://' or 'https://' URL, got '{}'",
                base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from Host header"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Storage: in-memory (not persisted)");
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
