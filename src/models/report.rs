//! Crawl result reporting structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Item;

/// A per-URL failure recorded during a crawl.
///
/// Failures are subtree-local: the rest of the crawl proceeds and the
/// final report carries both the partial aggregate and these records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrawlFailure {
    /// URL of the page that failed
    pub url: String,

    /// Human-readable error description
    pub error: String,
}

/// Timing and volume statistics for one crawl run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub pages_fetched: usize,
    pub pages_failed: usize,
}

/// The outcome of one crawl: aggregated items plus diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    /// Deduplicated items from all successfully fetched pages
    pub items: Vec<Item>,

    /// Pages that could not be fetched or parsed
    pub failures: Vec<CrawlFailure>,

    /// Run statistics
    pub stats: CrawlStats,
}

impl CrawlReport {
    /// Whether every attempted page was processed successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        let now = Utc::now();
        let mut report = CrawlReport {
            items: Vec::new(),
            failures: Vec::new(),
            stats: CrawlStats {
                start_time: now,
                end_time: now,
                pages_fetched: 0,
                pages_failed: 0,
            },
        };
        assert!(report.is_complete());

        report.failures.push(CrawlFailure {
            url: "https://example.com/page/2/".to_string(),
            error: "HTTP error: timeout".to_string(),
        });
        assert!(!report.is_complete());
    }
}
