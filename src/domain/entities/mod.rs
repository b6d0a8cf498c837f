//! Core domain entities.
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`ShortenOutcome`] - Whether a shorten request created or reused a link

pub mod link;

pub use link::{Link, ShortenOutcome};
