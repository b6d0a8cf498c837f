//! # QuickLink
//!
//! A small, fast URL shortening service built with Axum. Links are kept in
//! process memory and vanish when the process exits.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the store contract
//! - **Application Layer** ([`application`]) - Validation and orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Mutex-guarded in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Six-character alphanumeric codes with collision retry
//! - Deduplication: shortening the same URL twice returns the same code
//! - Atomic click counting under concurrent redirects
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:5000"          # Optional
//! export BASE_URL="https://sho.rt"      # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, ShortenOutcome};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::MemoryLinkRepository;
    pub use crate::state::AppState;
}
