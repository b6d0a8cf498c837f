//! Long URL syntax check.

use url::Url;

/// Returns true if `candidate` parses as an absolute URL with both a scheme
/// and a non-empty host written as a `//` authority.
///
/// Purely syntactic: no DNS lookup or connection attempt is made, and the
/// input is not normalized.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            !url.scheme().is_empty()
                && url.host_str().is_some_and(|h| !h.is_empty())
                && has_authority(candidate, url.scheme())
        }
        Err(_) => false,
    }
}

/// The parser invents a host for special schemes (`http:example.com`,
/// `https:\\example.com`), so the `://` separator is checked on the raw input.
fn has_authority(candidate: &str, scheme: &str) -> bool {
    let trimmed = candidate.trim_start_matches(|c: char| c <= ' ');

    trimmed
        .get(scheme.len()..)
        .is_some_and(|rest| rest.starts_with("://") && !rest[3..].starts_with(['/', '\\']))
}
