//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::memory::MemoryLinkRepository;

/// Link service backed by the in-memory store.
pub type AppLinkService = LinkService<MemoryLinkRepository>;

/// State shared by every request handler.
///
/// Built once at startup; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public base for short URLs; `None` derives it from the `Host` header.
    pub base_url: Option<String>,
    /// Bind address, used as the host when a request has no `Host` header.
    pub listen_addr: String,
}

impl AppState {
    pub fn new(
        link_service: Arc<AppLinkService>,
        base_url: Option<String>,
        listen_addr: impl Into<String>,
    ) -> Self {
        Self {
            link_service,
            base_url,
            listen_addr: listen_addr.into(),
        }
    }
}
