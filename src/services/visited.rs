//! Visited-page registry.

use std::collections::HashSet;
use std::sync::Mutex;

/// Thread-safe set of page URLs already claimed for fetching.
///
/// A fresh set is created per crawl run and never shared across runs.
/// URLs are insert-only: once claimed, a URL is never released, which
/// makes the crawl single-pass and breaks link cycles.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim a URL.
    ///
    /// Returns `true` iff the URL was not previously claimed. The check
    /// and the insert happen in one critical section, so among any
    /// number of concurrent callers exactly one wins.
    pub fn try_claim(&self, url: &str) -> bool {
        let mut urls = self.urls.lock().unwrap_or_else(|e| e.into_inner());
        urls.insert(url.to_string())
    }

    /// Number of claimed URLs.
    pub fn len(&self) -> usize {
        self.urls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no URL has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_first_claim_succeeds_second_fails() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://example.com/"));
        assert!(!visited.try_claim("https://example.com/"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_urls_claim_independently() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://example.com/a"));
        assert!(visited.try_claim("https://example.com/b"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_concurrent_claims_have_one_winner() {
        let visited = Arc::new(VisitedSet::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let visited = Arc::clone(&visited);
                std::thread::spawn(move || visited.try_claim("https://example.com/contested"))
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(visited.len(), 1);
    }
}
