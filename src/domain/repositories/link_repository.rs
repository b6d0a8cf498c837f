//! Repository trait for short link data access.

use crate::domain::entities::{Link, ShortenOutcome};

/// Store of code → [`Link`] mappings.
///
/// Every method is a single atomic step with respect to every other method:
/// implementations must not let a caller observe the table between the parts
/// of a compound operation such as [`get_or_create`](Self::get_or_create).
///
/// Methods are synchronous. The store is in-memory and an operation never
/// waits on anything but the store's own lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - mutex-guarded hash map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    fn find_by_code(&self, code: &str) -> Option<Link>;

    /// Finds the link whose long URL equals `long_url` byte for byte.
    ///
    /// No normalization is applied: `https://a.com` and `https://a.com/`
    /// are different URLs.
    fn find_by_long_url(&self, long_url: &str) -> Option<Link>;

    /// Inserts a new link for `long_url` under a freshly generated code.
    ///
    /// Regenerates the code until it does not collide with an existing key.
    /// Does not check whether `long_url` is already stored.
    fn create_unique(&self, long_url: &str) -> Link;

    /// Increments the click count of `code`.
    ///
    /// Returns the updated link, or `None` if the code is unknown.
    fn increment_clicks(&self, code: &str) -> Option<Link>;

    /// Returns the existing link for `long_url` with its click count
    /// incremented, or creates a new one.
    fn get_or_create(&self, long_url: &str) -> ShortenOutcome;

    /// Removes every link.
    fn clear(&self);

    /// Number of stored links.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
