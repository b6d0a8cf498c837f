//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL and its click counter.
///
/// `code`, `long_url` and `created_at` never change once the link is stored;
/// `clicks` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link with a zero click count.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            clicks: 0,
            created_at,
        }
    }
}

/// Result of a shorten request against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new link was inserted.
    Created(Link),
    /// The URL was already shortened; its click count has been incremented.
    Existing(Link),
}

impl ShortenOutcome {
    pub fn link(&self) -> &Link {
        match self {
            Self::Created(link) | Self::Existing(link) => link,
        }
    }

    pub fn into_link(self) -> Link {
        match self {
            Self::Created(link) | Self::Existing(link) => link,
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, Self::Existing(_))
    }
}
