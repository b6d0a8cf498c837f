//! Mutex-guarded in-memory implementation of [`LinkRepository`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::{Link, ShortenOutcome};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// The authoritative code → [`Link`] table.
///
/// A single mutex guards the whole table and every public operation acquires
/// it exactly once, so compound steps (dedup scan then increment-or-insert,
/// collision check then insert) are linearizable. Nothing here performs I/O
/// while the lock is held.
///
/// Contents live only as long as the process.
pub struct MemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
    generator: Box<dyn CodeGenerator>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository using random six-character codes.
    pub fn new() -> Self {
        Self::with_generator(RandomCodeGenerator)
    }

    /// Creates an empty repository drawing codes from `generator`.
    pub fn with_generator(generator: impl CodeGenerator + 'static) -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            generator: Box::new(generator),
        }
    }

    // Every mutation completes before the guard is released, so a panic in
    // another holder cannot leave a half-written entry behind.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Link>> {
        self.links.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts `long_url` under a code not present in `links`.
    ///
    /// Must be called with the table lock held; `links` is the guarded map.
    fn insert_unique(&self, links: &mut HashMap<String, Link>, long_url: &str) -> Link {
        let code = loop {
            let candidate = self.generator.generate();
            if !links.contains_key(&candidate) {
                break candidate;
            }
            warn!(code = %candidate, "Short code collision, regenerating");
        };

        let link = Link::new(code.clone(), long_url.to_string(), Utc::now());
        links.insert(code, link.clone());
        link
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkRepository for MemoryLinkRepository {
    fn find_by_code(&self, code: &str) -> Option<Link> {
        self.lock().get(code).cloned()
    }

    fn find_by_long_url(&self, long_url: &str) -> Option<Link> {
        self.lock()
            .values()
            .find(|link| link.long_url == long_url)
            .cloned()
    }

    fn create_unique(&self, long_url: &str) -> Link {
        let mut links = self.lock();
        self.insert_unique(&mut links, long_url)
    }

    fn increment_clicks(&self, code: &str) -> Option<Link> {
        let mut links = self.lock();
        let link = links.get_mut(code)?;
        link.clicks += 1;
        Some(link.clone())
    }

    fn get_or_create(&self, long_url: &str) -> ShortenOutcome {
        let mut links = self.lock();

        if let Some(link) = links.values_mut().find(|link| link.long_url == long_url) {
            link.clicks += 1;
            debug!(code = %link.code, clicks = link.clicks, "Long URL already shortened");
            return ShortenOutcome::Existing(link.clone());
        }

        ShortenOutcome::Created(self.insert_unique(&mut links, long_url))
    }

    fn clear(&self) {
        self.lock().clear();
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::utils::code_generator::is_well_formed_code;

    /// Hands out a fixed sequence of codes, then falls back to random ones.
    struct ScriptedGenerator {
        codes: Mutex<VecDeque<&'static str>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedGenerator {
        fn new(codes: &[&'static str]) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let generator = Self {
                codes: Mutex::new(codes.iter().copied().collect()),
                calls: calls.clone(),
            };
            (generator, calls)
        }
    }

    impl CodeGenerator for ScriptedGenerator {
        fn generate(&self) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.codes.lock().unwrap().pop_front() {
                Some(code) => code.to_string(),
                None => crate::utils::code_generator::generate_code(),
            }
        }
    }

    #[test]
    fn test_create_unique_starts_with_zero_clicks() {
        let repo = MemoryLinkRepository::new();

        let link = repo.create_unique("https://example.com");

        assert!(is_well_formed_code(&link.code));
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(repo.find_by_code(&link.code), Some(link));
    }

    #[test]
    fn test_create_unique_retries_on_collision() {
        let (generator, calls) = ScriptedGenerator::new(&["AAAAAA", "AAAAAA", "AAAAAA", "BBBBBB"]);
        let repo = MemoryLinkRepository::with_generator(generator);

        let first = repo.create_unique("https://one.example.com");
        let second = repo.create_unique("https://two.example.com");

        assert_eq!(first.code, "AAAAAA");
        assert_eq!(second.code, "BBBBBB");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(repo.len(), 2);
        assert_eq!(
            repo.find_by_code("AAAAAA").unwrap().long_url,
            "https://one.example.com"
        );
    }

    #[test]
    fn test_find_by_code_unknown() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_code("unknown123").is_none());
    }

    #[test]
    fn test_find_by_long_url_exact_match_only() {
        let repo = MemoryLinkRepository::new();
        let link = repo.create_unique("https://example.com/path");

        assert_eq!(
            repo.find_by_long_url("https://example.com/path").map(|l| l.code),
            Some(link.code)
        );
        assert!(repo.find_by_long_url("https://example.com/path/").is_none());
        assert!(repo.find_by_long_url("https://EXAMPLE.com/path").is_none());
        assert!(repo.find_by_long_url("https://example.com:443/path").is_none());
    }

    #[test]
    fn test_increment_clicks() {
        let repo = MemoryLinkRepository::new();
        let link = repo.create_unique("https://example.com");

        assert_eq!(repo.increment_clicks(&link.code).unwrap().clicks, 1);
        assert_eq!(repo.increment_clicks(&link.code).unwrap().clicks, 2);
        assert_eq!(repo.find_by_code(&link.code).unwrap().clicks, 2);
    }

    #[test]
    fn test_increment_clicks_unknown_code() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.increment_clicks("nope00").is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_get_or_create_deduplicates() {
        let repo = MemoryLinkRepository::new();

        let first = repo.get_or_create("https://example.com/a");
        let second = repo.get_or_create("https://example.com/a");
        let third = repo.get_or_create("https://example.com/a");

        assert!(!first.is_existing());
        assert!(second.is_existing());
        assert!(third.is_existing());

        assert_eq!(first.link().code, second.link().code);
        assert_eq!(first.link().clicks, 0);
        assert_eq!(second.link().clicks, 1);
        assert_eq!(third.link().clicks, 2);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_get_or_create_preserves_created_at() {
        let repo = MemoryLinkRepository::new();

        let created = repo.get_or_create("https://example.com").into_link();
        let existing = repo.get_or_create("https://example.com").into_link();

        assert_eq!(created.created_at, existing.created_at);
    }

    #[test]
    fn test_distinct_urls_get_distinct_codes() {
        let repo = MemoryLinkRepository::new();

        let codes: HashSet<String> = (0..500)
            .map(|i| repo.get_or_create(&format!("https://example.com/{i}")).into_link().code)
            .collect();

        assert_eq!(codes.len(), 500);
        assert_eq!(repo.len(), 500);
    }

    #[test]
    fn test_clear() {
        let repo = MemoryLinkRepository::new();
        let link = repo.create_unique("https://example.com");

        repo.clear();

        assert!(repo.is_empty());
        assert!(repo.find_by_code(&link.code).is_none());
    }

    #[test]
    fn test_concurrent_get_or_create_same_url_yields_one_code() {
        let repo = MemoryLinkRepository::new();
        const THREADS: usize = 16;

        let outcomes: Vec<ShortenOutcome> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| s.spawn(|| repo.get_or_create("https://race.example.com")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let codes: HashSet<&str> = outcomes.iter().map(|o| o.link().code.as_str()).collect();
        assert_eq!(codes.len(), 1);

        let created = outcomes.iter().filter(|o| !o.is_existing()).count();
        assert_eq!(created, 1);

        assert_eq!(repo.len(), 1);
        let code = codes.into_iter().next().unwrap();
        assert_eq!(
            repo.find_by_code(code).unwrap().clicks,
            (THREADS - 1) as u64
        );
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let repo = MemoryLinkRepository::new();
        let link = repo.create_unique("https://example.com");
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        std::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    for _ in 0..PER_THREAD {
                        repo.increment_clicks(&link.code);
                    }
                });
            }
        });

        assert_eq!(
            repo.find_by_code(&link.code).unwrap().clicks,
            (THREADS * PER_THREAD) as u64
        );
    }

    #[test]
    fn test_lock_survives_poisoning() {
        let repo = Arc::new(MemoryLinkRepository::new());
        let link = repo.create_unique("https://example.com");

        let poisoner = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.links.lock().unwrap();
            panic!("poison the table lock");
        })
        .join();

        assert!(repo.links.is_poisoned());
        assert_eq!(repo.increment_clicks(&link.code).unwrap().clicks, 1);
    }
}
