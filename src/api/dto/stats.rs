//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
